use const_fn::const_fn;

use crate::*;

macro_rules! panicking {
    ($($name:ident, $checked:ident, $nX:ident, $err:ident);*;) => {
        $(
            #[doc = concat!("The same as [", stringify!($checked), "](crate::", stringify!($checked), ") except it returns the bare result")]
            ///
            /// # Panics
            ///
            #[doc = concat!("If the result is invalid, this panics with the message of `ArithError::", stringify!($err), "`")]
            #[const_fn("1.57")]
            #[track_caller]
            #[must_use]
            pub const fn $name(a: $nX, b: $nX) -> $nX {
                match $checked(a, b) {
                    (r, true) => r,
                    (_, false) => ArithError::$err.panic(),
                }
            }
        )*
    };
}

panicking!(
    addp, add, isize, AddOverflow;
    subp, sub, isize, SubOverflow;
    mulp, mul, isize, MulOverflow;
    divp, div, isize, DivFailure;
    uaddp, uadd, usize, AddOverflow;
    usubp, usub, usize, SubOverflow;
    umulp, umul, usize, MulOverflow;
    udivp, udiv, usize, DivFailure;
);
