//! Converters plugged into a [`JsonSerializer`].
//!
//! The serializer offers every value it reads or writes to its converters
//! in registration order. The first converter whose [`can_convert`] accepts
//! the type, and which can do the requested direction, takes over.
//!
//! - [`UniversalInjectingConverter`]: injects any type without default
//!   construction, decided at runtime by a [`ConstructibilityClassifier`].
//! - [`TypedInjectingConverter`]: injects exactly one type, read side only.
//!
//! [`can_convert`]: JsonConverter::can_convert
//! [`ConstructibilityClassifier`]: crate::ConstructibilityClassifier

// -----------------------------------------------------------------------------
// Modules

mod typed;
mod universal;

// -----------------------------------------------------------------------------
// Exports

pub use typed::TypedInjectingConverter;
pub use universal::UniversalInjectingConverter;

use alloc::boxed::Box;

use serde_core::de::Error;
use vc_reflect::Reflect;
use vc_reflect::registry::TypeMeta;

use crate::Provider;
use crate::json::JsonSerializer;

// -----------------------------------------------------------------------------
// JsonConverter

/// Takes over reading or writing of the types it accepts.
///
/// Object safe, so a [`JsonSerializer`] can hold converters of any kind.
pub trait JsonConverter: Send + Sync {
    /// Returns `true` if the converter handles values of this type.
    fn can_convert(&self, type_meta: &TypeMeta) -> bool;

    /// Returns `false` if the converter never reads.
    #[inline]
    fn can_read(&self) -> bool {
        true
    }

    /// Returns `false` if the converter never writes.
    ///
    /// The serializer then writes accepted types with its default behavior.
    #[inline]
    fn can_write(&self) -> bool {
        true
    }

    /// Reads a complete value of the type `type_meta` describes.
    ///
    /// Nested values should be read back through `serializer`, so other
    /// converters see them.
    fn read_json<'de>(
        &self,
        type_meta: &TypeMeta,
        reader: &mut dyn erased_serde::Deserializer<'de>,
        serializer: &JsonSerializer,
    ) -> Result<Box<dyn Reflect>, erased_serde::Error>;

    /// Returns the view the serializer writes in place of `value`.
    fn write_json<'a>(
        &'a self,
        value: &'a dyn Reflect,
        serializer: &'a JsonSerializer,
    ) -> Result<Box<dyn erased_serde::Serialize + 'a>, erased_serde::Error>;
}

/// Builds an instance through `provider`, then fills its members from
/// `reader`.
fn read_injected<'de>(
    provider: &dyn Provider,
    type_meta: &TypeMeta,
    reader: &mut dyn erased_serde::Deserializer<'de>,
    serializer: &JsonSerializer,
) -> Result<Box<dyn Reflect>, erased_serde::Error> {
    let mut instance = provider.construct(type_meta).map_err(erased_serde::Error::custom)?;
    serializer.populate(reader, &mut *instance)?;
    Ok(instance)
}
