//! Failure classes of the checked operations

use core::fmt;

use const_fn::const_fn;

/// The class of operation that failed to produce a representable result.
///
/// The checked operators never return this directly, they report failure
/// through their validity flag. This is used by the `Result` returning and
/// panicking layers built on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArithError {
    /// The true sum is outside the range of the type
    AddOverflow,
    /// The true difference is outside the range of the type. For unsigned
    /// types this includes every `a - b` where `b > a`.
    SubOverflow,
    /// The true product is outside the range of the type
    MulOverflow,
    /// The divisor is zero, or a signed minimum was divided by negative one
    DivFailure,
}

use ArithError::*;

impl ArithError {
    /// Returns the message used when the failure is turned into a panic
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AddOverflow => "addition overflow",
            SubOverflow => "subtraction overflow",
            MulOverflow => "multiplication overflow",
            DivFailure => "division failure",
        }
    }

    /// Panics with the message of `self`
    ///
    /// # Panics
    ///
    /// Always
    // can't const panic with a non-literal message, this must mirror `as_str`
    #[const_fn("1.57")]
    #[track_caller]
    pub const fn panic(self) -> ! {
        match self {
            AddOverflow => panic!("addition overflow"),
            SubOverflow => panic!("subtraction overflow"),
            MulOverflow => panic!("multiplication overflow"),
            DivFailure => panic!("division failure"),
        }
    }
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithError {}

#[cfg(feature = "std")]
#[test]
fn panic_messages() {
    for e in [AddOverflow, SubOverflow, MulOverflow, DivFailure] {
        let payload = std::panic::catch_unwind(|| e.panic()).unwrap_err();
        assert_eq!(*payload.downcast_ref::<&str>().unwrap(), e.as_str());
    }
}
