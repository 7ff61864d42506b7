use core::any::Any;

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

/// A container for compile-time `Option<T>` info.
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    some_ty: Type,
    some_info: fn() -> &'static TypeInfo,
}

impl OptionInfo {
    impl_type_fn!(ty);

    /// Create a new [`OptionInfo`] for `TOption`, whose `Some` variant holds `T`.
    pub fn new<TOption: Any, T: Typed>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            some_ty: Type::of::<T>(),
            some_info: T::type_info,
        }
    }

    /// Returns the [`Type`] held by `Some`.
    #[inline]
    pub const fn some_ty(&self) -> &Type {
        &self.some_ty
    }

    /// Returns the [`TypeInfo`] of the type held by `Some`.
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }
}
