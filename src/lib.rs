#![cfg_attr(not(feature = "std"), no_std)]

//! # twofold
//!
//! Doubling a number, six ways: lessons in generics and compile-time
//! specialization on stable Rust.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - True / False / Flag<B> (type-level booleans), Numeric          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Specialization                                          |
//! |  - StaticMethodImpl, StaticSelect                                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Lessons                                                 |
//! |  - double, label, conditional, flagged                            |
//! |  - lesson (std): registry driving the binaries                    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Everything below the `lesson` module is `no_std` and writes into any
//! `core::fmt::Write`.
//!
//! ## Quick Start
//!
//! ```
//! use twofold::prelude::*;
//!
//! assert_eq!(times_two(21), 42);
//!
//! let mut out = String::new();
//! times_two_and_print(&mut out, 10.5).unwrap();
//! assert_eq!(out, "double: 21\n");
//!
//! assert_eq!(times_two_and_or::<false, 3>(), 3);
//! ```

#[cfg(any(feature = "std", test))]
extern crate alloc;

// Re-export paste for instantiate!
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Specialization
// =============================================================================
pub mod specialize;

// instantiate!
pub mod syntax_macros;

// =============================================================================
// Layer 2: Lessons
// =============================================================================
pub mod conditional;
pub mod double;
pub mod error;
pub mod flagged;
pub mod label;

#[cfg(feature = "std")]
pub mod lesson;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use double::times_two;
pub use error::{Error, Result};
pub use label::{print, print_by_type_tag, times_two_and_print, Print, TypeLabel};
pub use primitives::{AsBool, Bool, False, Flag, Numeric, True};

/// Common items for the lessons.
pub mod prelude {
    pub use crate::conditional::{
        times_two_and_or, times_two_and_or_gated, times_two_and_or_runtime,
        times_two_and_or_selected, Gated,
    };
    pub use crate::double::times_two;
    pub use crate::label::{print, print_by_type_tag, times_two_and_print, Print, TypeLabel};
    pub use crate::primitives::{Flag, Numeric};
}
