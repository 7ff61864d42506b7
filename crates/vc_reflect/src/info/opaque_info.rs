use core::any::Any;

use crate::info::{Type, impl_type_fn};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// "Opaque" means the type's internal representation is not exposed, for
/// example primitive types like `u64` or heap-backed types like `String`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: Any>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
