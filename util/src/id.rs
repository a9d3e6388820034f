/// Define a newtype id over an unsigned int, convertible to and from `usize`
/// so it can index an [`IdVec`](crate::IdVec).
#[macro_export]
macro_rules! typed_id {
    ($name:ident, $ty:ty) => {
        #[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name($ty);

        impl From<$name> for usize {
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl From<usize> for $name {
            fn from(val: usize) -> $name {
                debug_assert!(
                    val <= <$ty>::MAX as usize,
                    "{} out of range for {}",
                    val,
                    stringify!($name),
                );
                Self(val as $ty)
            }
        }

        impl From<$name> for $ty {
            fn from(id: $name) -> $ty {
                id.0
            }
        }

        impl From<$ty> for $name {
            fn from(val: $ty) -> $name {
                Self(val)
            }
        }
    };
}
