//! Fixed width operators. These are the ground truth that every other layer
//! delegates to.

mod div;
mod mul;
mod sum;

pub use div::*;
pub use mul::*;
pub use sum::*;
