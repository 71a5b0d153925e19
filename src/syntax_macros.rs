//! Declarative code-generation macros.

// =============================================================================
// instantiate! - Stamp out monomorphic wrappers of a generic function
// =============================================================================

/// Emit one named, non-generic function per listed type for a generic
/// `fn(T) -> T`.
///
/// Each wrapper is `<name>_<type>` and forwards to `<name>::<type>`, so the
/// instantiation exists as an ordinary item that can be named, exported
/// and taken as a function pointer.
///
/// # Usage
///
/// ```
/// use twofold::{instantiate, times_two};
///
/// instantiate!(times_two: u16, f32);
///
/// assert_eq!(times_two_u16(21), 42);
/// assert_eq!(times_two_f32(1.25), 2.5);
///
/// let by_pointer: fn(u16) -> u16 = times_two_u16;
/// assert_eq!(by_pointer(4), 8);
/// ```
#[macro_export]
macro_rules! instantiate {
    ($func:ident : $($ty:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = concat!("`", stringify!($func), "` instantiated for `", stringify!($ty), "`.")]
                #[inline(never)]
                pub fn [<$func _ $ty>](x: $ty) -> $ty {
                    $func::<$ty>(x)
                }
            )+
        }
    };
}
