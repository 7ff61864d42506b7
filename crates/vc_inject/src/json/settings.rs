use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::registry::TypeRegistry;

use crate::JsonConverter;

/// Configuration of a [`JsonSerializer`](super::JsonSerializer).
///
/// Holds the converters, consulted in insertion order, and the registry of
/// every type the serializer may meet. Types must be registered before they
/// are read or written; registering a type also registers its field types.
pub struct JsonSettings {
    converters: Vec<Arc<dyn JsonConverter>>,
    registry: TypeRegistry,
}

impl Default for JsonSettings {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSettings {
    /// Creates settings without converters, over a registry holding the
    /// primitive types.
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(TypeRegistry::new())
    }

    #[inline]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            converters: Vec::new(),
            registry,
        }
    }

    /// Appends a converter.
    #[inline]
    pub fn with_converter(mut self, converter: impl JsonConverter + 'static) -> Self {
        self.converters.push(Arc::new(converter));
        self
    }

    /// Appends a shared converter.
    #[inline]
    pub fn add_converter(&mut self, converter: Arc<dyn JsonConverter>) {
        self.converters.push(converter);
    }

    #[inline]
    pub fn converters(&self) -> &[Arc<dyn JsonConverter>] {
        &self.converters
    }

    #[inline]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }
}

impl fmt::Debug for JsonSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSettings")
            .field("converters", &self.converters.len())
            .field("registry", &self.registry)
            .finish()
    }
}
