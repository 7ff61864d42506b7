use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::Typed;
use vc_reflect::registry::FromType;

use super::ServiceProvider;
use crate::InjectError;

/// A type constructed from the services it depends on.
///
/// Fields that are not injected start out empty and are filled in later,
/// usually by reading a document.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vc_inject::{InjectError, Injectable, ServiceProvider, TypeTraitInject};
///
/// struct Clock { offset: i64 }
///
/// struct Job {
///     name: String,
///     clock: Arc<Clock>,
/// }
///
/// vc_reflect::impl_reflect_struct!(Job { name: String } skip [clock] traits [TypeTraitInject]);
///
/// impl Injectable for Job {
///     fn inject(services: &ServiceProvider) -> Result<Self, InjectError> {
///         Ok(Self { name: String::new(), clock: services.get_required::<Clock>()? })
///     }
/// }
/// ```
pub trait Injectable: Reflect + Typed + Sized {
    /// Builds an instance, pulling its collaborators from `services`.
    fn inject(services: &ServiceProvider) -> Result<Self, InjectError>;
}

/// A [`TypeTrait`] storing the [`Injectable`] recipe of a type.
///
/// [`ServiceProvider`] constructs exactly the types whose [`TypeMeta`]
/// carries this trait.
///
/// [`TypeTrait`]: vc_reflect::registry::TypeTrait
/// [`TypeMeta`]: vc_reflect::registry::TypeMeta
#[derive(Clone)]
pub struct TypeTraitInject {
    func: fn(&ServiceProvider) -> Result<Box<dyn Reflect>, InjectError>,
}

impl TypeTraitInject {
    /// Builds an instance of the underlying type.
    #[inline]
    pub fn inject(&self, services: &ServiceProvider) -> Result<Box<dyn Reflect>, InjectError> {
        (self.func)(services)
    }
}

impl<T: Injectable> FromType<T> for TypeTraitInject {
    fn from_type() -> Self {
        Self {
            func: |services| Ok(Box::new(T::inject(services)?)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use vc_reflect::registry::{FromType, GetTypeMeta};

    use super::TypeTraitInject;
    use crate::fixtures::{Configuration, SubClass, services};
    use crate::{InjectError, ServiceCollection};

    #[test]
    fn recipe_builds_the_concrete_type() {
        let recipe = <TypeTraitInject as FromType<SubClass>>::from_type();
        let sub = recipe.inject(&services()).unwrap().take::<SubClass>().unwrap();
        assert_eq!(sub.configuration().get("test"), Some("value"));
        assert!(sub.name.is_empty());
    }

    #[test]
    fn recipe_is_stored_in_type_meta() {
        let meta = SubClass::get_type_meta();
        assert!(meta.has_trait::<TypeTraitInject>());
    }

    #[test]
    fn missing_service_is_reported() {
        let recipe = <TypeTraitInject as FromType<SubClass>>::from_type();
        let empty = ServiceCollection::new().build();
        let err = recipe.inject(&empty).err().unwrap();
        assert_eq!(err, InjectError::unresolvable::<Configuration>());
    }
}
