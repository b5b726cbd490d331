//! Division by zero is always invalid. For signed types, dividing the minimum
//! value by negative one is also invalid, because the true quotient is one
//! past the maximum. Remainders are truncating, the sign follows the dividend.

macro_rules! signed_div {
    ($($div:ident, $quotient:ident, $iX:ident);*;) => {
        $(
            #[doc = concat!("Divides two `", stringify!($iX), "`s, returning the truncated quotient and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $div(a: $iX, b: $iX) -> ($iX, bool) {
                if b == 0 || (a == $iX::MIN && b == -1) {
                    return (0, false)
                }
                (a / b, true)
            }

            #[doc = concat!("Divides two `", stringify!($iX), "`s, returning the quotient, remainder, and if they are valid")]
            #[inline]
            #[must_use]
            pub const fn $quotient(a: $iX, b: $iX) -> ($iX, $iX, bool) {
                if b == 0 || (a == $iX::MIN && b == -1) {
                    return (0, 0, false)
                }
                (a / b, a % b, true)
            }
        )*
    };
}

macro_rules! unsigned_div {
    ($($div:ident, $quotient:ident, $uX:ident);*;) => {
        $(
            #[doc = concat!("Divides two `", stringify!($uX), "`s, returning the quotient and if it is valid")]
            #[inline]
            #[must_use]
            pub const fn $div(a: $uX, b: $uX) -> ($uX, bool) {
                if b == 0 {
                    return (0, false)
                }
                (a / b, true)
            }

            #[doc = concat!("Divides two `", stringify!($uX), "`s, returning the quotient, remainder, and if they are valid")]
            #[inline]
            #[must_use]
            pub const fn $quotient(a: $uX, b: $uX) -> ($uX, $uX, bool) {
                if b == 0 {
                    return (0, 0, false)
                }
                (a / b, a % b, true)
            }
        )*
    };
}

signed_div!(
    div8, quotient8, i8;
    div16, quotient16, i16;
    div32, quotient32, i32;
    div64, quotient64, i64;
);

unsigned_div!(
    udiv8, uquotient8, u8;
    udiv16, uquotient16, u16;
    udiv32, uquotient32, u32;
    udiv64, uquotient64, u64;
);
