//! One body for both flag values.

use core::fmt::{self, Write};

use crate::double::times_two;
use crate::primitives::Numeric;

/// Holds one value, fixed at construction.
///
/// ```
/// use twofold::flagged::collapsed::TimesTwoAndOrPrint;
///
/// let on = TimesTwoAndOrPrint::<true, 10, i32>::new(10);
/// let off = TimesTwoAndOrPrint::<false, 3, i32>::new(3);
/// assert_eq!((on.output(), TimesTwoAndOrPrint::<true, 10, i32>::output_x()), (20, 20));
/// assert_eq!((off.output(), TimesTwoAndOrPrint::<false, 3, i32>::output_x()), (3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimesTwoAndOrPrint<const TIMES_TWO: bool, const X: i32, T> {
    value: T,
}

impl<const TIMES_TWO: bool, const X: i32, T: Numeric> TimesTwoAndOrPrint<TIMES_TWO, X, T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// The value given to [`new`](Self::new).
    pub fn stored(&self) -> T {
        self.value
    }

    pub fn output(&self) -> T {
        if TIMES_TWO { times_two(self.value) } else { self.value }
    }

    pub fn print<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.output())
    }

    pub const fn output_x() -> i32 {
        crate::conditional::times_two_and_or::<TIMES_TWO, X>()
    }

    pub fn printx<W: Write>(out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::output_x())
    }
}
