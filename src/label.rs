//! Type-specialized printing.
//!
//! Two ways to print `"<label>: <value>"` for a concrete type:
//!
//! 1. [`print`]: explicit specialization. [`Print`] has one hand-written impl
//!    per type and no blanket impl, so the impl is picked by the type checker.
//! 2. [`print_by_type_tag`]: one generic body that compares `TypeId`s and
//!    branches.
//!
//! ```
//! let mut out = String::new();
//! twofold::times_two_and_print(&mut out, 10).unwrap();
//! twofold::times_two_and_print(&mut out, 10.5).unwrap();
//! assert_eq!(out, "int: 20\ndouble: 21\n");
//! ```
//!
//! There is no generic fallback for [`Print`]:
//!
//! ```compile_fail
//! let mut out = String::new();
//! twofold::print(&mut out, 10_u8).unwrap();
//! ```

use core::any::TypeId;
use core::fmt::{self, Display, Write};

use crate::double::times_two;
use crate::primitives::Numeric;

/// Name of a primitive type, spelled as in C-family languages.
pub trait TypeLabel {
    const LABEL: &'static str;
}

macro_rules! impl_type_label {
    ($($ty:ty => $label:literal),* $(,)?) => {
        $(
            impl TypeLabel for $ty {
                const LABEL: &'static str = $label;
            }
        )*
    };
}

impl_type_label! {
    i8 => "signed char", i16 => "short", i32 => "int", i64 => "long",
    i128 => "__int128", isize => "ptrdiff_t",
    u8 => "unsigned char", u16 => "unsigned short", u32 => "unsigned int",
    u64 => "unsigned long", u128 => "unsigned __int128", usize => "size_t",
    f32 => "float", f64 => "double",
}

/// Print a value with its type label. Implemented per type.
pub trait Print {
    fn print<W: Write>(self, out: &mut W) -> fmt::Result;
}

impl Print for i32 {
    fn print<W: Write>(self, out: &mut W) -> fmt::Result {
        writeln!(out, "int: {self}")
    }
}

impl Print for f64 {
    fn print<W: Write>(self, out: &mut W) -> fmt::Result {
        writeln!(out, "double: {self}")
    }
}

/// Print `x` through its [`Print`] specialization.
#[inline]
pub fn print<T: Print, W: Write>(out: &mut W, x: T) -> fmt::Result {
    x.print(out)
}

/// Print `x` by branching on its `TypeId`.
///
/// Recognizes `i32` and `f64`. For any other type nothing is written and
/// `Ok(false)` is returned.
pub fn print_by_type_tag<T, W>(out: &mut W, x: T) -> Result<bool, fmt::Error>
where
    T: Display + 'static,
    W: Write,
{
    let id = TypeId::of::<T>();
    if id == TypeId::of::<i32>() {
        writeln!(out, "{}: {x}", <i32 as TypeLabel>::LABEL)?;
    } else if id == TypeId::of::<f64>() {
        writeln!(out, "{}: {x}", <f64 as TypeLabel>::LABEL)?;
    } else {
        tracing::trace!(type_name = core::any::type_name::<T>(), "no type tag matched");
        return Ok(false);
    }
    Ok(true)
}

/// Double `x` generically, then print it through [`print`].
pub fn times_two_and_print<T, W>(out: &mut W, x: T) -> fmt::Result
where
    T: Numeric + Print,
    W: Write,
{
    print(out, times_two(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_labels() {
        assert_eq!(<i32 as TypeLabel>::LABEL, "int");
        assert_eq!(<f64 as TypeLabel>::LABEL, "double");
        assert_eq!(<f32 as TypeLabel>::LABEL, "float");
    }

    #[test]
    fn test_type_tag_matches_specialization() {
        let mut specialized = String::new();
        let mut tagged = String::new();
        print(&mut specialized, 7).unwrap();
        print(&mut specialized, 2.5).unwrap();
        assert!(print_by_type_tag(&mut tagged, 7).unwrap());
        assert!(print_by_type_tag(&mut tagged, 2.5).unwrap());
        assert_eq!(specialized, tagged);
    }

    #[test]
    fn test_type_tag_unknown_type_is_silent() {
        let mut out = String::new();
        assert!(!print_by_type_tag(&mut out, "hello").unwrap());
        assert!(!print_by_type_tag(&mut out, 3_u8).unwrap());
        assert!(out.is_empty());
    }
}
