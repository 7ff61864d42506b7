use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct, in declaration order.
pub struct StructFieldIter<'a> {
    inner: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        Self {
            inner: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.inner.name_at(self.index)?;
        let value = self.inner.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.inner.field_len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased struct operations via reflection.
///
/// Only reflected fields are visible here. Members declared as skipped on
/// the [`StructInfo`](crate::info::StructInfo) are not reachable.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Struct;
///
/// #[derive(Default)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// vc_reflect::impl_reflect_struct!(Foo { a: i32, b: bool });
///
/// let foo = Foo { a: 10, b: true };
/// let ts: &dyn Struct = &foo;
///
/// assert_eq!(ts.field_len(), 2);
/// assert_eq!(ts.name_at(1), Some("b"));
/// assert_eq!(ts.field_as::<i32>("a"), Some(&10));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    ///
    /// Returns `None` if the field does not exist.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field named `name`.
    ///
    /// Returns `None` if the field does not exist.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the value of the field with index `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&'static str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns an iterator over `(name, value)` pairs in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }

    /// Returns the field named `name` downcast to `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns the field named `name` mutably downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}
