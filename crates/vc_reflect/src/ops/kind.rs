use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Optional, Struct};

/// An immutable enumeration of "kinds" of a reflected type.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Option(&'a dyn Optional),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of "kinds" of a reflected type.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Option(&'a mut dyn Optional),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Option(_) => ReflectKind::Option,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of this value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Option(_) => ReflectKind::Option,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
