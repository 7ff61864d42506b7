use core::any::Any;

/// A capability of a type, stored in its [`TypeMeta`](crate::registry::TypeMeta).
///
/// Usually a small `Clone` struct of function pointers built with
/// [`FromType`](crate::registry::FromType), so callers can use the capability
/// holding only a `TypeId`.
pub trait TypeTrait: Any + Send + Sync {}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {}

impl dyn TypeTrait {
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl core::fmt::Debug for dyn TypeTrait {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad("TypeTrait")
    }
}
