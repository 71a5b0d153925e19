//! A value holder parametrized by `<TIMES_TWO, X, T>`.
//!
//! Two builds of the same type:
//! - [`split`]: one inherent impl per flag value (partial specialization).
//! - [`collapsed`]: one impl whose methods branch on the const flag.
//!
//! The split bodies double in both flag states, as the lesson they come
//! from does; the collapsed body only doubles when the flag is `true`.
//!
//! ```
//! use twofold::flagged::{collapsed, split};
//!
//! let mut out = String::new();
//! collapsed::TimesTwoAndOrPrint::<false, 3, i32>::new(3).print(&mut out).unwrap();
//! split::TimesTwoAndOrPrint::<false, 3, i32>::new(3).print(&mut out).unwrap();
//! assert_eq!(out, "3\n6\n");
//! ```

pub mod collapsed;
pub mod split;
