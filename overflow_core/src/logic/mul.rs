use overflow_internals::*;

// Widths with a wider native type compute the exact product in it and compare
// against the bounds.
macro_rules! widened_mul {
    ($($mul:ident, $iX:ident, $widen:ident, $iD:ident);*;) => {
        $(
            #[doc = concat!("Multiplies two `", stringify!($iX), "`s, returning the product and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $mul(a: $iX, b: $iX) -> ($iX, bool) {
                let tmp: $iD = $widen(a, b);
                if tmp > ($iX::MAX as $iD) || tmp < ($iX::MIN as $iD) {
                    return (0, false)
                }
                (tmp as $iX, true)
            }
        )*
    };
}

macro_rules! widened_umul {
    ($($umul:ident, $uX:ident, $widen:ident, $uD:ident);*;) => {
        $(
            #[doc = concat!("Multiplies two `", stringify!($uX), "`s, returning the product and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $umul(a: $uX, b: $uX) -> ($uX, bool) {
                let tmp: $uD = $widen(a, b);
                if tmp > ($uX::MAX as $uD) {
                    return (0, false)
                }
                (tmp as $uX, true)
            }
        )*
    };
}

widened_mul!(
    mul8, i8, widen_mul_i8, i16;
    mul16, i16, widen_mul_i16, i32;
    mul32, i32, widen_mul_i32, i64;
);

widened_umul!(
    umul8, u8, widen_mul_u8, u16;
    umul16, u16, widen_mul_u16, u32;
    umul32, u32, widen_mul_u32, u64;
);

/// Multiplies two `i64`s, returning the product and if it is valid
///
/// There is no wider native type to check in, so the wrapped product is
/// divided by `a` to see if `b` is recovered. If it is, the remainder of that
/// division must be a multiple of `2^64` smaller than `|a|`, which means it
/// is zero and the product is exact. The only pair where the division itself
/// overflows is `i64::MIN` with `-1`, which is special cased.
#[inline]
#[must_use]
pub const fn mul64(a: i64, b: i64) -> (i64, bool) {
    if a == 0 || b == 0 {
        return (0, true)
    }
    if (a == i64::MIN && b == -1) || (a == -1 && b == i64::MIN) {
        return (0, false)
    }
    let c = a.wrapping_mul(b);
    if (c / a) != b {
        return (0, false)
    }
    (c, true)
}

/// Multiplies two `u64`s, returning the product and if it is valid
///
/// This uses the same division recheck as [mul64](crate::mul64)
#[inline]
#[must_use]
pub const fn umul64(a: u64, b: u64) -> (u64, bool) {
    if a == 0 || b == 0 {
        return (0, true)
    }
    let c = a.wrapping_mul(b);
    if (c / a) != b {
        return (0, false)
    }
    (c, true)
}
