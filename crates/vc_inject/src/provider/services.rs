use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::{Any, TypeId, type_name};
use core::fmt;
use std::sync::OnceLock;

use vc_reflect::Reflect;
use vc_reflect::registry::TypeMeta;
use vc_utils::TypeIdMap;

use super::{Provider, TypeTraitInject};
use crate::InjectError;

type SharedService = Arc<dyn Any + Send + Sync>;
type ServiceFactory = Box<dyn Fn(&ServiceProvider) -> Result<SharedService, InjectError> + Send + Sync>;

struct ServiceEntry {
    type_path: &'static str,
    instance: OnceLock<Result<SharedService, InjectError>>,
    factory: Option<ServiceFactory>,
}

impl ServiceEntry {
    fn resolve(&self, services: &ServiceProvider) -> Result<SharedService, InjectError> {
        self.instance
            .get_or_init(|| match &self.factory {
                Some(factory) => {
                    log::trace!("building singleton `{}`", self.type_path);
                    factory(services)
                }
                None => Err(InjectError::Unresolvable {
                    type_path: self.type_path,
                }),
            })
            .clone()
    }
}

// -----------------------------------------------------------------------------
// ServiceCollection

/// Collects singleton services before building a [`ServiceProvider`].
///
/// Services are keyed by type; adding a service twice keeps the last one.
///
/// # Example
///
/// ```
/// use vc_inject::ServiceCollection;
///
/// struct Greeting(&'static str);
/// struct Banner(String);
///
/// let services = ServiceCollection::new()
///     .add_singleton(Greeting("hello"))
///     .add_singleton_with(|sp| {
///         let greeting = sp.get_required::<Greeting>()?;
///         Ok(Banner(format!("{}!", greeting.0)))
///     })
///     .build();
///
/// assert_eq!(services.get_required::<Banner>().unwrap().0, "hello!");
/// ```
pub struct ServiceCollection {
    services: TypeIdMap<ServiceEntry>,
}

impl Default for ServiceCollection {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceCollection {
    /// Creates an empty collection.
    #[inline]
    pub const fn new() -> Self {
        Self {
            services: TypeIdMap::new(),
        }
    }

    /// Adds a ready-made singleton.
    pub fn add_singleton<T: Any + Send + Sync>(mut self, value: T) -> Self {
        let service: SharedService = Arc::new(value);
        self.insert::<T>(ServiceEntry {
            type_path: type_name::<T>(),
            instance: OnceLock::from(Ok(service)),
            factory: None,
        });
        self
    }

    /// Adds a singleton built on first request.
    ///
    /// The factory runs at most once, and its result, failure included, is
    /// kept for every later request. It may request other services, but a
    /// service must not depend on itself.
    pub fn add_singleton_with<T, F>(mut self, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&ServiceProvider) -> Result<T, InjectError> + Send + Sync + 'static,
    {
        self.insert::<T>(ServiceEntry {
            type_path: type_name::<T>(),
            instance: OnceLock::new(),
            factory: Some(Box::new(move |services| {
                let service: SharedService = Arc::new(factory(services)?);
                Ok(service)
            })),
        });
        self
    }

    fn insert<T: Any>(&mut self, entry: ServiceEntry) {
        if self.services.insert(TypeId::of::<T>(), entry).is_some() {
            log::debug!("service `{}` replaced", type_name::<T>());
        }
    }

    /// Returns `true` if a service of type `T` was added.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.services.contains_type::<T>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Freezes the collection into a provider.
    #[inline]
    pub fn build(self) -> ServiceProvider {
        ServiceProvider {
            services: self.services,
        }
    }
}

// -----------------------------------------------------------------------------
// ServiceProvider

/// A frozen registry of singleton services.
///
/// As a [`Provider`], it constructs the types whose [`TypeMeta`] carries a
/// [`TypeTraitInject`], handing itself to their recipe.
pub struct ServiceProvider {
    services: TypeIdMap<ServiceEntry>,
}

impl ServiceProvider {
    /// Returns the service of type `T`, or `None` if it was never added.
    ///
    /// # Errors
    ///
    /// Fails if the service factory fails.
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Option<Arc<T>>, InjectError> {
        let Some(entry) = self.services.get(&TypeId::of::<T>()) else {
            return Ok(None);
        };
        match entry.resolve(self)?.downcast::<T>() {
            Ok(service) => Ok(Some(service)),
            Err(_) => Err(InjectError::factory::<T>("produced a service of another type")),
        }
    }

    /// Returns the service of type `T`.
    ///
    /// # Errors
    ///
    /// Fails with [`InjectError::Unresolvable`] if the service was never
    /// added, or with the factory's error.
    #[inline]
    pub fn get_required<T: Any + Send + Sync>(&self) -> Result<Arc<T>, InjectError> {
        self.get::<T>()?.ok_or_else(InjectError::unresolvable::<T>)
    }

    /// Returns `true` if a service of type `T` is available.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.services.contains_type::<T>()
    }
}

impl Provider for ServiceProvider {
    fn construct(&self, type_meta: &TypeMeta) -> Result<Box<dyn Reflect>, InjectError> {
        let Some(recipe) = type_meta.get_trait::<TypeTraitInject>() else {
            return Err(InjectError::NotInjectable {
                type_path: type_meta.type_path(),
            });
        };
        log::trace!("injecting `{}`", type_meta.type_path());
        recipe.inject(self)
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.services.values().map(|entry| entry.type_path))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
