use core::any::Any;

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

/// A container for compile-time list info, such as `Vec<T>`.
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Create a new [`ListInfo`] for the list `TList` holding `TItem`.
    pub fn new<TList: Any, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: Type::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the [`Type`] of the list items.
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the [`TypeInfo`] of the list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
