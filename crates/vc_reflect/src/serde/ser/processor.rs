use serde_core::Serializer;

use crate::Reflect;
use crate::registry::TypeRegistry;

/// Allows overriding the default serialization behavior of
/// [`SerializeDriver`] for certain types.
///
/// The processor is consulted first for every value the driver writes.
///
/// - Return `Ok(result)` when the processor handles the value.
/// - Return `Err(serializer)` to hand the untouched serializer back, so the
///   driver continues with its default strategy.
///
/// [`SerializeDriver`]: crate::serde::SerializeDriver
pub trait SerializeProcessor {
    /// Attempts to serialize `value`.
    fn try_serialize<S: Serializer>(
        &self,
        value: &dyn Reflect,
        registry: &TypeRegistry,
        serializer: S,
    ) -> Result<Result<S::Ok, S::Error>, S>;
}

impl SerializeProcessor for () {
    #[inline(always)]
    fn try_serialize<S: Serializer>(
        &self,
        _value: &dyn Reflect,
        _registry: &TypeRegistry,
        serializer: S,
    ) -> Result<Result<S::Ok, S::Error>, S> {
        Err(serializer)
    }
}
