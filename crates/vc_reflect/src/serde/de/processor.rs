use alloc::boxed::Box;

use serde_core::Deserializer;

use crate::Reflect;
use crate::registry::{TypeMeta, TypeRegistry};

/// Allows overriding the default deserialization behavior of
/// [`DeserializeDriver`] for certain types.
///
/// The processor is consulted first for every value the driver reads, the
/// root value and every nested field, item and option payload alike.
///
/// - Return `Ok(result)` when the processor handles the type. The result is
///   used as is, errors included.
/// - Return `Err(deserializer)` to hand the untouched deserializer back, so
///   the driver continues with its default strategy.
///
/// The processor is shared by reference, so it can start nested reads of its
/// own while a read is in progress.
///
/// # Example
///
/// ```
/// use core::any::TypeId;
/// use serde_core::Deserialize;
/// use serde_core::de::{DeserializeSeed, Deserializer, IgnoredAny};
/// use vc_reflect::Reflect;
/// use vc_reflect::registry::{TypeMeta, TypeRegistry};
/// use vc_reflect::serde::{DeserializeDriver, DeserializeProcessor};
///
/// // Reads every `u32` as zero, whatever the input holds.
/// struct ZeroU32;
///
/// impl DeserializeProcessor for ZeroU32 {
///     fn try_deserialize<'de, D: Deserializer<'de>>(
///         &self,
///         type_meta: &TypeMeta,
///         _registry: &TypeRegistry,
///         deserializer: D,
///     ) -> Result<Result<Box<dyn Reflect>, D::Error>, D> {
///         if type_meta.type_id() != TypeId::of::<u32>() {
///             return Err(deserializer);
///         }
///         Ok(IgnoredAny::deserialize(deserializer).map(|_| 0_u32.into_boxed_reflect()))
///     }
/// }
///
/// let registry = TypeRegistry::new();
/// let meta = registry.get(TypeId::of::<u32>()).unwrap();
/// let driver = DeserializeDriver::with_processor(meta, &registry, &ZeroU32);
///
/// let mut json = serde_json::Deserializer::from_str("42");
/// let value = driver.deserialize(&mut json).unwrap();
/// assert_eq!(value.take::<u32>().unwrap(), 0);
/// ```
///
/// [`DeserializeDriver`]: crate::serde::DeserializeDriver
pub trait DeserializeProcessor {
    /// Attempts to deserialize the value which a [`TypeMeta`] describes.
    fn try_deserialize<'de, D: Deserializer<'de>>(
        &self,
        type_meta: &TypeMeta,
        registry: &TypeRegistry,
        deserializer: D,
    ) -> Result<Result<Box<dyn Reflect>, D::Error>, D>;
}

impl DeserializeProcessor for () {
    #[inline(always)]
    fn try_deserialize<'de, D: Deserializer<'de>>(
        &self,
        _type_meta: &TypeMeta,
        _registry: &TypeRegistry,
        deserializer: D,
    ) -> Result<Result<Box<dyn Reflect>, D::Error>, D> {
        Err(deserializer)
    }
}
