//! Overflow checked integer arithmetic
//!
//! This is the core library of the `overflow` system of crates. This crate is
//! strictly `no-std` and `no-alloc`. Every operation returns its result
//! together with a validity flag, which is `true` if and only if the result is
//! the exact mathematical value. When the flag is `false` the returned value
//! is zero and carries no meaning. This is intended for callers that need to
//! decide at each step whether to escalate to an arbitrary precision
//! representation.
//!
//! ```
//! use overflow_core::{add, add64, quotient, usub};
//!
//! assert_eq!(add64(10, 20), (30, true));
//! assert_eq!(add64(i64::MAX, 1), (0, false));
//! assert_eq!(add(10, 20), (30, true));
//! assert_eq!(quotient(7, 2), (3, 1, true));
//! // unsigned subtraction never wraps around
//! assert!(!usub(3, 5).1);
//! ```
//!
//! The operations come in several layers:
//!
//! - fixed width operators such as `add32` and `umul64`, for 8, 16, 32, and 64
//!   bits
//! - native width operators such as `add` and `umul` over `isize` and `usize`,
//!   which delegate to the 32 or 64 bit operators depending on the platform
//! - `Result` returning operators such as `add_checked`
//! - panicking operators such as `addp`, for when overflow is a bug
//! - the [OverflowArith] trait for generic code

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

#[doc(hidden)]
pub use overflow_internals;
pub use overflow_internals::{is_64_bit, ArithError};

mod checked;
mod logic;
mod native;
mod panicking;
mod traits;

pub use checked::*;
pub use logic::*;
pub use native::*;
pub use panicking::*;
pub use traits::OverflowArith;

pub mod prelude {
    pub use crate::{is_64_bit, ArithError, OverflowArith};
}
