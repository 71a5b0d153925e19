//! One body per flag value.
//!
//! Methods exist only on the concrete `TimesTwoAndOrPrint<true, ..>` and
//! `TimesTwoAndOrPrint<false, ..>`; with the flag left generic there is
//! nothing to call:
//!
//! ```compile_fail
//! use twofold::flagged::split::TimesTwoAndOrPrint;
//!
//! fn any_flag<const B: bool>(t: &TimesTwoAndOrPrint<B, 1, i32>) -> i32 {
//!     t.output()
//! }
//! ```

use core::fmt::{self, Write};

use crate::double::times_two;
use crate::primitives::Numeric;

/// Holds one value, fixed at construction.
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
}

impl<const X: i32, T: Numeric> TimesTwoAndOrPrint<true, X, T> {
    pub fn output(&self) -> T {
        times_two(self.value)
    }

    pub fn print<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.output())
    }

    pub fn output_x() -> i32 {
        X * 2
    }

    pub fn printx<W: Write>(out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::output_x())
    }
}

// Same bodies as the `true` impl.
impl<const X: i32, T: Numeric> TimesTwoAndOrPrint<false, X, T> {
    pub fn output(&self) -> T {
        times_two(self.value)
    }

    pub fn print<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.output())
    }

    pub fn output_x() -> i32 {
        X * 2
    }

    pub fn printx<W: Write>(out: &mut W) -> fmt::Result {
        writeln!(out, "{}", Self::output_x())
    }
}
