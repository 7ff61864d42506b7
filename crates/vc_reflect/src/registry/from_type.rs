use crate::info::Typed;

/// Trait used to generate [`TypeTrait`] for trait reflection.
///
/// Type traits are created from a concrete type once and stored in the
/// type's [`TypeMeta`], see [`TypeMeta::insert_trait`].
///
/// # Example
///
/// ```
/// # use vc_reflect::registry::{TypeMeta, TypeTraitDefault, FromType};
/// let mut meta = TypeMeta::of::<String>();
///
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
/// ```
///
/// [`TypeTrait`]: crate::registry::TypeTrait
/// [`TypeMeta`]: crate::registry::TypeMeta
/// [`TypeMeta::insert_trait`]: crate::registry::TypeMeta::insert_trait
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
