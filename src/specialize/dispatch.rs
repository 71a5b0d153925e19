//! Type-Level Dispatch System
//!
//! Zero-overhead selection between implementation types. Uses pure type
//! selection instead of `if` branches.
//!
//! ## Example
//!
//! ```
//! use twofold::specialize::{StaticMethodImpl, StaticSelect};
//!
//! struct Doubled;
//! struct Plain;
//!
//! impl StaticMethodImpl<i32> for Doubled { fn call() -> i32 { 20 } }
//! impl StaticMethodImpl<i32> for Plain { fn call() -> i32 { 10 } }
//!
//! assert_eq!(<StaticSelect<true, Doubled, Plain> as StaticMethodImpl<i32>>::call(), 20);
//! assert_eq!(<StaticSelect<false, Doubled, Plain> as StaticMethodImpl<i32>>::call(), 10);
//! ```

use core::marker::PhantomData;

use crate::primitives::{AsBool, Bool, Flag};

/// Trait for static/associated function implementations (no self parameter).
pub trait StaticMethodImpl<Output = ()> {
    fn call() -> Output;
}

/// Selects `Then` when `B` is `true`, `Else` otherwise.
///
/// Itself implements `StaticMethodImpl`, so selections nest.
pub struct StaticSelect<const B: bool, Then, Else>(PhantomData<(Then, Else)>);

impl<const B: bool, Then, Else, Output> StaticMethodImpl<Output> for StaticSelect<B, Then, Else>
where
    Flag<B>: AsBool,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    #[inline(always)]
    fn call() -> Output {
        <<Flag<B> as AsBool>::Out as Bool>::static_dispatch::<Then, Else, Output>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;
    struct C;

    impl StaticMethodImpl<&'static str> for A {
        fn call() -> &'static str { "a" }
    }
    impl StaticMethodImpl<&'static str> for B {
        fn call() -> &'static str { "b" }
    }
    impl StaticMethodImpl<&'static str> for C {
        fn call() -> &'static str { "c" }
    }

    #[test]
    fn test_nested_selection() {
        type Inner<const X: bool> = StaticSelect<X, B, C>;
        assert_eq!(<StaticSelect<true, A, Inner<true>> as StaticMethodImpl<&str>>::call(), "a");
        assert_eq!(<StaticSelect<false, A, Inner<true>> as StaticMethodImpl<&str>>::call(), "b");
        assert_eq!(<StaticSelect<false, A, Inner<false>> as StaticMethodImpl<&str>>::call(), "c");
    }
}
