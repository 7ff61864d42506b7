use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// A [`TypeTrait`] that constructs a type with no arguments.
///
/// A type carrying this trait can be built without any outside collaborator.
/// Deserialization of structs, lists and options starts from this default
/// instance and fills it in.
///
/// # Example
///
/// ```
/// use vc_reflect::registry::{FromType, TypeTraitDefault};
///
/// let generator = <TypeTraitDefault as FromType<String>>::from_type();
///
/// let s = generator.default().take::<String>().unwrap();
/// assert_eq!(s, "");
/// ```
///
/// [`TypeTrait`]: crate::registry::TypeTrait
#[derive(Clone)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    /// Call T's [`Default`].
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Typed + Reflect> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || Box::<T>::default(),
        }
    }
}
