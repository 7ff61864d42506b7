use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{ReflectKind, TypeInfo};
use crate::ops::{ReflectMut, ReflectRef};

/// A value whose shape can be inspected and changed at runtime.
///
/// Drivers hold values as `dyn Reflect` and branch on [`reflect_ref`] or
/// [`reflect_mut`] to reach fields, items and optional payloads. Implement it
/// through [`impl_reflect_struct!`] or [`impl_reflect_opaque!`], which keep
/// `Reflect`, [`Typed`] and [`GetTypeMeta`] consistent with each other.
///
/// Prefer [`ty_id`](Reflect::ty_id) over [`Any::type_id`]: on a
/// `Box<dyn Reflect>` the latter reports the box.
///
/// ```
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert_ne!(x.type_id(), TypeId::of::<i32>());
/// assert_eq!(x.ty_id(), TypeId::of::<i32>());
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`impl_reflect_struct!`]: crate::impl_reflect_struct
/// [`impl_reflect_opaque!`]: crate::impl_reflect_opaque
/// [`Typed`]: crate::info::Typed
/// [`GetTypeMeta`]: crate::registry::GetTypeMeta
pub trait Reflect: Send + Sync + Any {
    #[inline]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The [`TypeId`] of the concrete value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn reflect_type_info(&self) -> &'static TypeInfo;

    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_type_info().kind()
    }

    /// Overwrites `self` with `value`, or hands `value` back if its type
    /// differs.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Unboxes to `Box<T>`. A mismatch returns the original box untouched.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            Ok(any.downcast::<T>().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }

    /// Moves the value out as a `T`.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x = 10_i32.into_boxed_reflect();
    /// assert!(x.take::<u8>().is_err());
    ///
    /// let x = 10_i32.into_boxed_reflect();
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|boxed| *boxed)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.reflect_kind(), self.reflect_type_path())
    }
}

/// Expands to the `set`, `reflect_ref` and `reflect_mut` methods of a
/// `Reflect` impl whose kind is `$kind`.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
        ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            ::core::result::Result::Ok(())
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}
