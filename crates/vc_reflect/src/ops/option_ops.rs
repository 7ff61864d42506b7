use alloc::boxed::Box;

use crate::Reflect;

/// A trait for type-erased `Option<T>` operations.
pub trait Optional: Reflect {
    /// Returns the value held by `Some`, or `None`.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Sets the option to `Some(value)`.
    ///
    /// Returns `value` back if it is not of the inner type.
    fn replace(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Sets the option to `None`.
    fn clear(&mut self);
}
