use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::info::{ListInfo, OpaqueInfo, OptionInfo, StructInfo};

/// A `TypeId` together with the readable path of the same type.
///
/// Compared and hashed by id only.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// As printed by [`core::any::type_name`], e.g. `alloc::string::String`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[inline]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path)
    }
}

/// Adds the `Type` accessors to an info struct storing its `Type` in
/// `$field`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.$field.path()
        }
    };
}

pub(crate) use impl_type_fn;

/// Which access trait a reflected value offers.
///
/// Drivers without a serde impl for a type fall back to handling it by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, reached through [`Struct`](crate::ops::Struct).
    Struct,
    /// A sequence, reached through [`List`](crate::ops::List).
    List,
    /// `Option<T>`, reached through [`Optional`](crate::ops::Optional).
    Option,
    /// No inner structure; numbers, strings and other leaf values.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Struct => "Struct",
            Self::List => "List",
            Self::Option => "Option",
            Self::Opaque => "Opaque",
        };
        f.pad(name)
    }
}

/// The static description of a reflected type, one variant per
/// [`ReflectKind`].
///
/// Reached from [`Typed::type_info`](crate::info::Typed::type_info), from
/// [`Reflect::reflect_type_info`](crate::Reflect::reflect_type_info), or from
/// a registered [`TypeMeta`](crate::registry::TypeMeta).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Option(OptionInfo),
    Opaque(OpaqueInfo),
}

impl TypeInfo {
    pub const fn as_struct(&self) -> Option<&StructInfo> {
        match self {
            Self::Struct(info) => Some(info),
            _ => None,
        }
    }

    pub const fn as_option(&self) -> Option<&OptionInfo> {
        match self {
            Self::Option(info) => Some(info),
            _ => None,
        }
    }

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Option(_) => ReflectKind::Option,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
