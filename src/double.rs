//! Generic doubling.
//!
//! ```
//! use twofold::times_two;
//!
//! assert_eq!(times_two(10), 20);
//! assert_eq!(times_two::<i32>(10), 20);
//! assert_eq!(times_two(10.5), 21.0);
//! assert_eq!(times_two::<f64>(f64::from(10_i32)), 20.0);
//! ```
//!
//! Types without a `Numeric` impl are rejected at compile time:
//!
//! ```compile_fail
//! use twofold::times_two;
//!
//! let _ = times_two("ten");
//! ```

use crate::primitives::Numeric;

/// Return `x * 2`.
///
/// Overflow follows the ordinary `*` of `T`.
#[inline]
pub fn times_two<T: Numeric>(x: T) -> T {
    x * T::TWO
}

/// Explicit `i32` and `f64` instantiations of [`times_two`].
pub mod instances {
    use super::times_two;

    crate::instantiate!(times_two: i32, f64);
}
