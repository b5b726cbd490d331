// Overflow is detected by comparing against the bounds before the operation
// happens, so the plain `+` and `-` below can never overflow.

macro_rules! signed_sum {
    ($($add:ident, $sub:ident, $iX:ident);*;) => {
        $(
            #[doc = concat!("Adds two `", stringify!($iX), "`s, returning the sum and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $add(a: $iX, b: $iX) -> ($iX, bool) {
                if (b > 0 && a > ($iX::MAX - b)) || (b < 0 && a < ($iX::MIN - b)) {
                    return (0, false)
                }
                (a + b, true)
            }

            #[doc = concat!("Subtracts two `", stringify!($iX), "`s, returning the difference and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $sub(a: $iX, b: $iX) -> ($iX, bool) {
                if (b < 0 && a > ($iX::MAX + b)) || (b > 0 && a < ($iX::MIN + b)) {
                    return (0, false)
                }
                (a - b, true)
            }
        )*
    };
}

macro_rules! unsigned_sum {
    ($($add:ident, $sub:ident, $uX:ident);*;) => {
        $(
            #[doc = concat!("Adds two `", stringify!($uX), "`s, returning the sum and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $add(a: $uX, b: $uX) -> ($uX, bool) {
                if a > ($uX::MAX - b) {
                    return (0, false)
                }
                (a + b, true)
            }

            #[doc = concat!("Subtracts two `", stringify!($uX), "`s, returning the difference and if it is valid. ")]
            #[doc = "This is invalid whenever `b > a`, the result never wraps around."]
            #[inline]
            #[must_use]
            pub const fn $sub(a: $uX, b: $uX) -> ($uX, bool) {
                if b > a {
                    return (0, false)
                }
                (a - b, true)
            }
        )*
    };
}

signed_sum!(
    add8, sub8, i8;
    add16, sub16, i16;
    add32, sub32, i32;
    add64, sub64, i64;
);

unsigned_sum!(
    uadd8, usub8, u8;
    uadd16, usub16, u16;
    uadd32, usub32, u32;
    uadd64, usub64, u64;
);
