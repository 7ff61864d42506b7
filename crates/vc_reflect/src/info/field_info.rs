use core::any::TypeId;

use crate::info::{TypeInfo, Typed};

/// Static metadata for a named field of a struct.
///
/// The field's own [`TypeInfo`] is resolved lazily, so recursive types do
/// not have to build their whole graph up front.
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    type_id: TypeId,
    type_path: &'static str,
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a field named `name` whose type is `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the field name as written in the struct.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the field type.
    #[inline(always)]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type path of the field type.
    #[inline(always)]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the field type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
