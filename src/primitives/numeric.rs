//! Numeric value types accepted by the doubling lessons.

use core::fmt::{Debug, Display};
use core::ops::Mul;

/// A primitive number that can be doubled and printed.
///
/// Types without an impl (e.g. `&str`, `bool`) are rejected wherever a
/// `Numeric` bound appears.
pub trait Numeric: Copy + PartialEq + Mul<Output = Self> + Display + Debug + 'static {
    /// The multiplier `2` in this type.
    const TWO: Self;
}

/// Generate `Numeric` impls from `type => literal two` pairs.
macro_rules! impl_numeric {
    ($($ty:ty => $two:expr),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const TWO: Self = $two;
            }
        )*
    };
}

impl_numeric! {
    i8 => 2, i16 => 2, i32 => 2, i64 => 2, i128 => 2, isize => 2,
    u8 => 2, u16 => 2, u32 => 2, u64 => 2, u128 => 2, usize => 2,
    f32 => 2.0, f64 => 2.0,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two<T: Numeric>() -> T {
        T::TWO
    }

    #[test]
    fn test_two_per_type() {
        assert_eq!(two::<i32>(), 2);
        assert_eq!(two::<u8>(), 2);
        assert_eq!(two::<f64>(), 2.0);
        assert_eq!(two::<f32>(), 2.0);
    }
}
