use crate::*;

/// Overflow checked arithmetic as methods, for code that is generic over the
/// integer type. Every method delegates to the free function of the same
/// width and has the same semantics.
///
/// ```
/// use overflow_core::OverflowArith;
///
/// fn sum<T: OverflowArith + Default>(xs: &[T]) -> Option<T> {
///     let mut acc = T::default();
///     for x in xs {
///         match acc.overflow_add(*x) {
///             (r, true) => acc = r,
///             (_, false) => return None,
///         }
///     }
///     Some(acc)
/// }
///
/// assert_eq!(sum(&[100u8, 100, 55]), Some(255));
/// assert_eq!(sum(&[100u8, 100, 56]), None);
/// assert_eq!(sum(&[i32::MIN, -1]), None);
/// ```
pub trait OverflowArith: Sized + Copy {
    /// Returns `self + rhs` and if it is valid
    fn overflow_add(self, rhs: Self) -> (Self, bool);

    /// Returns `self - rhs` and if it is valid
    fn overflow_sub(self, rhs: Self) -> (Self, bool);

    /// Returns `self * rhs` and if it is valid
    fn overflow_mul(self, rhs: Self) -> (Self, bool);

    /// Returns `self / rhs` and if it is valid
    fn overflow_div(self, rhs: Self) -> (Self, bool);

    /// Returns `self / rhs`, `self % rhs`, and if they are valid
    fn overflow_quotient(self, rhs: Self) -> (Self, Self, bool);
}

macro_rules! impl_overflow_arith {
    ($($t:ident, $add:ident, $sub:ident, $mul:ident, $div:ident, $quotient:ident);*;) => {
        $(
            impl OverflowArith for $t {
                #[inline]
                fn overflow_add(self, rhs: Self) -> (Self, bool) {
                    $add(self, rhs)
                }

                #[inline]
                fn overflow_sub(self, rhs: Self) -> (Self, bool) {
                    $sub(self, rhs)
                }

                #[inline]
                fn overflow_mul(self, rhs: Self) -> (Self, bool) {
                    $mul(self, rhs)
                }

                #[inline]
                fn overflow_div(self, rhs: Self) -> (Self, bool) {
                    $div(self, rhs)
                }

                #[inline]
                fn overflow_quotient(self, rhs: Self) -> (Self, Self, bool) {
                    $quotient(self, rhs)
                }
            }
        )*
    };
}

impl_overflow_arith!(
    i8, add8, sub8, mul8, div8, quotient8;
    i16, add16, sub16, mul16, div16, quotient16;
    i32, add32, sub32, mul32, div32, quotient32;
    i64, add64, sub64, mul64, div64, quotient64;
    isize, add, sub, mul, div, quotient;
    u8, uadd8, usub8, umul8, udiv8, uquotient8;
    u16, uadd16, usub16, umul16, udiv16, uquotient16;
    u32, uadd32, usub32, umul32, udiv32, uquotient32;
    u64, uadd64, usub64, umul64, udiv64, uquotient64;
    usize, uadd, usub, umul, udiv, uquotient;
);
