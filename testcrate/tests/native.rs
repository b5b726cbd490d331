//! The native width operators must agree with the fixed width operators of the
//! platform's width

use overflow::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use testcrate::{edge_biased, N};

#[test]
fn probe() {
    assert_eq!(is_64_bit(), cfg!(target_pointer_width = "64"));
    assert_eq!(is_64_bit(), usize::BITS == 64);
    // stays the same
    for _ in 0..8 {
        assert_eq!(is_64_bit(), is_64_bit());
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn dispatch_agreement() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..N {
        let x = edge_biased(&mut rng);
        let y = edge_biased(&mut rng);
        let (a, b) = (x as isize, y as isize);
        let (c, d) = (x as i64, y as i64);
        assert_eq!(add(a, b), (add64(c, d).0 as isize, add64(c, d).1));
        assert_eq!(sub(a, b), (sub64(c, d).0 as isize, sub64(c, d).1));
        assert_eq!(mul(a, b), (mul64(c, d).0 as isize, mul64(c, d).1));
        assert_eq!(div(a, b), (div64(c, d).0 as isize, div64(c, d).1));
        let tmp = quotient64(c, d);
        assert_eq!(quotient(a, b), (tmp.0 as isize, tmp.1 as isize, tmp.2));

        let (a, b) = (x as usize, y as usize);
        assert_eq!(uadd(a, b), (uadd64(x, y).0 as usize, uadd64(x, y).1));
        assert_eq!(usub(a, b), (usub64(x, y).0 as usize, usub64(x, y).1));
        assert_eq!(umul(a, b), (umul64(x, y).0 as usize, umul64(x, y).1));
        assert_eq!(udiv(a, b), (udiv64(x, y).0 as usize, udiv64(x, y).1));
        let tmp = uquotient64(x, y);
        assert_eq!(uquotient(a, b), (tmp.0 as usize, tmp.1 as usize, tmp.2));
    }
}

#[cfg(target_pointer_width = "32")]
#[test]
fn dispatch_agreement() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..N {
        let (x, y) = (edge_biased(&mut rng) as u32, edge_biased(&mut rng) as u32);
        let (a, b) = (x as isize, y as isize);
        let (c, d) = (x as i32, y as i32);
        assert_eq!(add(a, b), (add32(c, d).0 as isize, add32(c, d).1));
        assert_eq!(sub(a, b), (sub32(c, d).0 as isize, sub32(c, d).1));
        assert_eq!(mul(a, b), (mul32(c, d).0 as isize, mul32(c, d).1));
        assert_eq!(div(a, b), (div32(c, d).0 as isize, div32(c, d).1));
        let tmp = quotient32(c, d);
        assert_eq!(quotient(a, b), (tmp.0 as isize, tmp.1 as isize, tmp.2));

        let (a, b) = (x as usize, y as usize);
        assert_eq!(uadd(a, b), (uadd32(x, y).0 as usize, uadd32(x, y).1));
        assert_eq!(usub(a, b), (usub32(x, y).0 as usize, usub32(x, y).1));
        assert_eq!(umul(a, b), (umul32(x, y).0 as usize, umul32(x, y).1));
        assert_eq!(udiv(a, b), (udiv32(x, y).0 as usize, udiv32(x, y).1));
        let tmp = uquotient32(x, y);
        assert_eq!(uquotient(a, b), (tmp.0 as usize, tmp.1 as usize, tmp.2));
    }
}

/// Operands that fit in 32 bits behave the same on every platform, except
/// where the 32 bit result overflows
#[test]
fn narrow_operands() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(1);
    for _ in 0..N {
        let (c, d) = (
            edge_biased(&mut rng) as i32,
            edge_biased(&mut rng) as i32,
        );
        let (a, b) = (c as isize, d as isize);
        if let (r, true) = add32(c, d) {
            assert_eq!(add(a, b), (r as isize, true));
        }
        if let (r, true) = sub32(c, d) {
            assert_eq!(sub(a, b), (r as isize, true));
        }
        if let (r, true) = mul32(c, d) {
            assert_eq!(mul(a, b), (r as isize, true));
        }
        if let (r, true) = div32(c, d) {
            assert_eq!(div(a, b), (r as isize, true));
        }
        if d == 0 {
            assert_eq!(div(a, b), (0, false));
        }
    }
}

/// Checks the division recheck of `umul64` against a widening multiplication
/// that only uses 64 bit arithmetic
#[test]
fn umul64_reference() {
    use overflow::overflow_internals::widening_mul_u64;

    let mut rng = Xoshiro128StarStar::seed_from_u64(2);
    for _ in 0..N {
        let (x, y) = (edge_biased(&mut rng), edge_biased(&mut rng));
        let (lo, hi) = widening_mul_u64(x, y);
        if hi == 0 {
            assert_eq!(umul64(x, y), (lo, true));
        } else {
            assert_eq!(umul64(x, y), (0, false));
        }
    }
}
