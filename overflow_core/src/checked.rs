use crate::*;

macro_rules! checked {
    ($($name:ident, $op:ident, $nX:ident, $err:ident);*;) => {
        $(
            #[doc = concat!("The same as [", stringify!($op), "](crate::", stringify!($op), ") except failure is returned as `Err(ArithError::", stringify!($err), ")`")]
            #[inline]
            pub const fn $name(a: $nX, b: $nX) -> Result<$nX, ArithError> {
                match $op(a, b) {
                    (r, true) => Ok(r),
                    (_, false) => Err(ArithError::$err),
                }
            }
        )*
    };
}

checked!(
    add_checked, add, isize, AddOverflow;
    sub_checked, sub, isize, SubOverflow;
    mul_checked, mul, isize, MulOverflow;
    div_checked, div, isize, DivFailure;
    uadd_checked, uadd, usize, AddOverflow;
    usub_checked, usub, usize, SubOverflow;
    umul_checked, umul, usize, MulOverflow;
    udiv_checked, udiv, usize, DivFailure;
);
