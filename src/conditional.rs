//! Compile-time vs run-time conditional doubling.
//!
//! Four routes to the same numbers: double `X` when the flag is set,
//! pass it through otherwise.
//!
//! | form | flag known | selection |
//! |------|------------|-----------|
//! | [`times_two_and_or`] | compile time | `if` on a const generic, const-evaluated |
//! | [`times_two_and_or_selected`] | compile time | `Bool::static_dispatch` over impl types |
//! | [`times_two_and_or_gated`] | compile time | one [`Gated`] impl per `Flag<B>` |
//! | [`times_two_and_or_runtime`] | run time | ordinary `if` |
//!
//! ```
//! use twofold::conditional::*;
//!
//! const TWENTY: i32 = times_two_and_or::<true, 10>();
//! assert_eq!(TWENTY, 20);
//! assert_eq!(times_two_and_or_runtime(true, 10), TWENTY);
//! assert_eq!(times_two_and_or_gated::<false, 3>(), 3);
//! ```
//!
//! Overflow in the const form surfaces when the value is const-evaluated:
//!
//! ```compile_fail
//! const BOOM: i32 = twofold::conditional::times_two_and_or::<true, { i32::MAX }>();
//! assert_eq!(BOOM, 0);
//! ```

use core::fmt::{self, Write};

use crate::primitives::{AsBool, Flag};
use crate::specialize::{StaticMethodImpl, StaticSelect};

// =============================================================================
// Const-evaluated branch
// =============================================================================

/// `X * 2` when `TIMES_TWO`, else `X`.
///
/// Both arms type-check; only the selected one is ever evaluated.
#[inline]
pub const fn times_two_and_or<const TIMES_TWO: bool, const X: i32>() -> i32 {
    if TIMES_TWO { X * 2 } else { X }
}

/// Print [`times_two_and_or`] followed by a newline.
pub fn print_times_two_and_or<const TIMES_TWO: bool, const X: i32, W: Write>(
    out: &mut W,
) -> fmt::Result {
    writeln!(out, "{}", times_two_and_or::<TIMES_TWO, X>())
}

// =============================================================================
// Type-level selection
// =============================================================================

/// Produces `X * 2`.
pub struct DoubleConst<const X: i32>;

/// Produces `X` unchanged.
pub struct KeepConst<const X: i32>;

impl<const X: i32> StaticMethodImpl<i32> for DoubleConst<X> {
    #[inline(always)]
    fn call() -> i32 {
        X * 2
    }
}

impl<const X: i32> StaticMethodImpl<i32> for KeepConst<X> {
    #[inline(always)]
    fn call() -> i32 {
        X
    }
}

/// Same result as [`times_two_and_or`], with the arm picked as a type.
///
/// Only the chosen impl is instantiated for a given `TIMES_TWO`.
#[inline]
pub fn times_two_and_or_selected<const TIMES_TWO: bool, const X: i32>() -> i32
where
    Flag<TIMES_TWO>: AsBool,
{
    <StaticSelect<TIMES_TWO, DoubleConst<X>, KeepConst<X>> as StaticMethodImpl<i32>>::call()
}

// =============================================================================
// Run-time branch
// =============================================================================

/// `x * 2` when `times_two`, else `x`, decided at run time.
#[inline]
pub fn times_two_and_or_runtime(times_two: bool, x: i32) -> i32 {
    tracing::trace!(times_two, x, "run-time branch");
    if times_two { x * 2 } else { x }
}

/// Print [`times_two_and_or_runtime`] followed by a newline.
pub fn print_times_two_and_or_runtime<W: Write>(
    out: &mut W,
    times_two: bool,
    x: i32,
) -> fmt::Result {
    writeln!(out, "{}", times_two_and_or_runtime(times_two, x))
}

// =============================================================================
// Flag-gated impl pair
// =============================================================================

/// Implemented exactly once per flag value.
///
/// `Flag<true>` and `Flag<false>` are distinct types, so the two impls can
/// never overlap, and a concrete `B` always finds one of them.
///
/// Generic code that leaves the flag open must carry the bound itself:
///
/// ```compile_fail
/// fn any_flag<const B: bool>() -> i32 {
///     twofold::conditional::times_two_and_or_gated::<B, 1>()
/// }
/// ```
pub trait Gated<const X: i32> {
    fn value() -> i32;
}

impl<const X: i32> Gated<X> for Flag<true> {
    #[inline(always)]
    fn value() -> i32 {
        X * 2
    }
}

impl<const X: i32> Gated<X> for Flag<false> {
    #[inline(always)]
    fn value() -> i32 {
        X
    }
}

/// Resolve through the [`Gated`] impl enabled for `TIMES_TWO`.
#[inline]
pub fn times_two_and_or_gated<const TIMES_TWO: bool, const X: i32>() -> i32
where
    Flag<TIMES_TWO>: Gated<X>,
{
    <Flag<TIMES_TWO> as Gated<X>>::value()
}

/// Print [`times_two_and_or_gated`] followed by a newline.
pub fn print_times_two_and_or_gated<const TIMES_TWO: bool, const X: i32, W: Write>(
    out: &mut W,
) -> fmt::Result
where
    Flag<TIMES_TWO>: Gated<X>,
{
    writeln!(out, "{}", times_two_and_or_gated::<TIMES_TWO, X>())
}
