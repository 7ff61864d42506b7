use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::Reflect;

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.list.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}

/// A trait for type-erased, growable sequences such as `Vec<T>`.
pub trait List: Reflect {
    /// Returns the item at `index`, if in bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an item.
    ///
    /// Returns `value` back if it is not of the item type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;
}

impl dyn List {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}
