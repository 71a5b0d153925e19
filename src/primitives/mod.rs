//! # Layer 0: Primitives
//!
//! Basic building blocks for the lessons:
//! - `bool.rs`: Type-level boolean logic (`True`/`False`, `Flag<B>`).
//! - `numeric.rs`: The `Numeric` bound for doubling.

pub mod bool;
pub mod numeric;

// Re-export key types at this level
pub use bool::{AsBool, Bool, False, Flag, If, True};
pub use numeric::Numeric;
