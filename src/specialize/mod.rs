//! # Layer 1: Specialization Sugar
//!
//! Specialization mechanisms for Stable Rust.
//!
//! ```text
//! specialize/
//! └── dispatch.rs - Type-level dispatch (StaticMethodImpl, StaticSelect)
//! ```

pub mod dispatch;

pub use dispatch::{StaticMethodImpl, StaticSelect};
