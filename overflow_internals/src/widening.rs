macro_rules! widen_mul {
    ($($name:ident, $x:ident, $d:ident);*;) => {
        $(
            /// Computes `x * y` in the next wider type. This cannot overflow.
            #[inline]
            #[must_use]
            pub const fn $name(x: $x, y: $x) -> $d {
                (x as $d) * (y as $d)
            }
        )*
    };
}

widen_mul!(
    widen_mul_i8, i8, i16;
    widen_mul_i16, i16, i32;
    widen_mul_i32, i32, i64;
    widen_mul_u8, u8, u16;
    widen_mul_u16, u16, u32;
    widen_mul_u32, u32, u64;
);

/// Computes `lhs * rhs` and returns the full product as a tuple, where the
/// first element is the least significant part and the second is the most
/// significant. Only 64 bit arithmetic is used, so this works as a reference
/// for 64 bit multiplication without any wider native type.
pub const fn widening_mul_u64(lhs: u64, rhs: u64) -> (u64, u64) {
    //                       [rhs_hi]  [rhs_lo]
    //                       [lhs_hi]  [lhs_lo]
    //                     X___________________
    //                       [------tmp0------]
    //             [------tmp1------]
    //             [------tmp2------]
    //     [------tmp3------]
    // +_______________________________________
    //                       [------sum0------]
    //     [------sum1------]

    let lhs_lo = lhs as u32;
    let rhs_lo = rhs as u32;
    let lhs_hi = (lhs >> 32) as u32;
    let rhs_hi = (rhs >> 32) as u32;
    let tmp0 = widen_mul_u32(lhs_lo, rhs_lo);
    let tmp1 = widen_mul_u32(lhs_lo, rhs_hi);
    let tmp2 = widen_mul_u32(lhs_hi, rhs_lo);
    let tmp3 = widen_mul_u32(lhs_hi, rhs_hi);
    // tmp1 and tmp2 straddle the boundary, there are two carries
    let (sum0, carry0) = tmp0.overflowing_add(tmp1 << 32);
    let (sum0, carry1) = sum0.overflowing_add(tmp2 << 32);
    // `tmp3 <= (2^32 - 1)^2` leaves room for everything added to it
    let sum1 = tmp3 + (tmp1 >> 32) + (tmp2 >> 32) + (carry0 as u64) + (carry1 as u64);
    (sum0, sum1)
}

#[test]
fn widening_mul_u64_matches_u128() {
    use rand_xoshiro::{
        rand_core::{RngCore, SeedableRng},
        Xoshiro128StarStar,
    };

    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let edges = [0, 1, 2, u32::MAX as u64, 1 << 32, u64::MAX - 1, u64::MAX];
    for lhs in edges {
        for rhs in edges {
            let full = (lhs as u128) * (rhs as u128);
            assert_eq!(widening_mul_u64(lhs, rhs), (full as u64, (full >> 64) as u64));
        }
    }
    for _ in 0..10_000 {
        let lhs = rng.next_u64() >> (rng.next_u32() % 64);
        let rhs = rng.next_u64() >> (rng.next_u32() % 64);
        let full = (lhs as u128) * (rhs as u128);
        assert_eq!(widening_mul_u64(lhs, rhs), (full as u64, (full >> 64) as u64));
    }
}
