//! Type-level boolean logic.
//!
//! Core types: `True`, `False`, the `Bool` trait, and `Flag<B>` which lifts a
//! `const bool` into the type system.

use crate::specialize::dispatch::StaticMethodImpl;

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Type-level NOT.
    type Not: Bool;

    /// Call a static method based on this boolean value.
    /// If `True`, calls `Then::call()`.
    /// If `False`, calls `Else::call()`.
    ///
    /// Only the selected impl's body is instantiated.
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>;
}

/// Type-level true.
#[derive(Debug)]
pub struct True;

/// Type-level false.
#[derive(Debug)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Not = False;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Then::call()
    }
}

impl Bool for False {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Not = True;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Else::call()
    }
}

/// A `const bool` carried as a type.
///
/// Impls written for `Flag<true>` and `Flag<false>` are disjoint by
/// coherence, which is what makes flag-gated impl pairs unambiguous.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flag<const B: bool>;

/// Convert const bool to type-level Bool.
pub trait AsBool {
    type Out: Bool;
}

impl AsBool for Flag<true> {
    type Out = True;
}

impl AsBool for Flag<false> {
    type Out = False;
}

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <<Flag<C> as AsBool>::Out as Bool>::If<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    #[test]
    fn test_flag_maps_to_bool() {
        assert!(<<Flag<true> as AsBool>::Out as Bool>::VALUE);
        assert!(!<<Flag<false> as AsBool>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_not_flips() {
        assert!(!<<True as Bool>::Not as Bool>::VALUE);
        assert!(<<False as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_if_alias_selects_type() {
        assert_eq!(TypeId::of::<If<true, u8, i64>>(), TypeId::of::<u8>());
        assert_eq!(TypeId::of::<If<false, u8, i64>>(), TypeId::of::<i64>());
    }
}
