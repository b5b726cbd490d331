use crate::*;

// The narrowing `as` casts are lossless because `is_64_bit` guarantees the
// fixed width in the taken branch equals the native width.
macro_rules! native_binop {
    ($($name:ident, $nX:ident, $op64:ident, $x64:ident, $op32:ident, $x32:ident);*;) => {
        $(
            #[doc = concat!("Native width `", stringify!($nX), "` version of [", stringify!($op64), "](crate::", stringify!($op64), ") and [", stringify!($op32), "](crate::", stringify!($op32), ")")]
            #[inline]
            #[must_use]
            pub const fn $name(a: $nX, b: $nX) -> ($nX, bool) {
                if is_64_bit() {
                    let (r, ok) = $op64(a as $x64, b as $x64);
                    (r as $nX, ok)
                } else {
                    let (r, ok) = $op32(a as $x32, b as $x32);
                    (r as $nX, ok)
                }
            }
        )*
    };
}

macro_rules! native_quotient {
    ($($name:ident, $nX:ident, $op64:ident, $x64:ident, $op32:ident, $x32:ident);*;) => {
        $(
            #[doc = concat!("Native width `", stringify!($nX), "` version of [", stringify!($op64), "](crate::", stringify!($op64), ") and [", stringify!($op32), "](crate::", stringify!($op32), ")")]
            #[inline]
            #[must_use]
            pub const fn $name(a: $nX, b: $nX) -> ($nX, $nX, bool) {
                if is_64_bit() {
                    let (quo, rem, ok) = $op64(a as $x64, b as $x64);
                    (quo as $nX, rem as $nX, ok)
                } else {
                    let (quo, rem, ok) = $op32(a as $x32, b as $x32);
                    (quo as $nX, rem as $nX, ok)
                }
            }
        )*
    };
}

native_binop!(
    add, isize, add64, i64, add32, i32;
    sub, isize, sub64, i64, sub32, i32;
    mul, isize, mul64, i64, mul32, i32;
    div, isize, div64, i64, div32, i32;
    uadd, usize, uadd64, u64, uadd32, u32;
    usub, usize, usub64, u64, usub32, u32;
    umul, usize, umul64, u64, umul32, u32;
    udiv, usize, udiv64, u64, udiv32, u32;
);

native_quotient!(
    quotient, isize, quotient64, i64, quotient32, i32;
    uquotient, usize, uquotient64, u64, uquotient32, u32;
);
