use serde_core::ser::Error;
use serde_core::{Serialize, Serializer};

use super::SerializeProcessor;
use super::list_serializer::ListSerializer;
use super::struct_serializer::StructSerializer;

use crate::Reflect;
use crate::ops::ReflectRef;
use crate::registry::{TypeRegistry, TypeTraitSerialize};

// -----------------------------------------------------------------------------
// SerializeDriver

/// A serializer for reflection types.
///
/// The driver follows a fixed priority:
///
/// 1. The [`SerializeProcessor`], if it claims the value.
/// 2. The type's [`TypeTraitSerialize`], if registered.
/// 3. Reflection, by kind: structs write their reflected fields in
///    declaration order, options write `None` as null, lists write every item.
///
/// Opaque types without [`TypeTraitSerialize`] cannot be written.
///
/// # Example
///
/// ```
/// use vc_reflect::registry::TypeRegistry;
/// use vc_reflect::serde::SerializeDriver;
///
/// struct Point { x: i32, y: Option<i32> }
///
/// vc_reflect::impl_reflect_struct!(Point { x: i32, y: Option<i32> });
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Point>();
///
/// let point = Point { x: 1, y: None };
/// let json = serde_json::to_string(&SerializeDriver::new(&point, &registry)).unwrap();
///
/// assert_eq!(json, r#"{"x":1,"y":null}"#);
/// ```
pub struct SerializeDriver<'a, P: SerializeProcessor = ()> {
    value: &'a dyn Reflect,
    registry: &'a TypeRegistry,
    processor: Option<&'a P>,
    skip_root_processor: bool,
}

impl<'a> SerializeDriver<'a, ()> {
    /// Creates a driver without processor.
    #[inline]
    pub const fn new(value: &'a dyn Reflect, registry: &'a TypeRegistry) -> Self {
        Self {
            value,
            registry,
            processor: None,
            skip_root_processor: false,
        }
    }
}

impl<'a, P: SerializeProcessor> SerializeDriver<'a, P> {
    /// Creates a driver consulting `processor` for every value it writes.
    #[inline]
    pub const fn with_processor(
        value: &'a dyn Reflect,
        registry: &'a TypeRegistry,
        processor: &'a P,
    ) -> Self {
        Self {
            value,
            registry,
            processor: Some(processor),
            skip_root_processor: false,
        }
    }

    /// Creates a driver that writes `value` itself with the default strategy,
    /// while nested values still go through `processor`.
    ///
    /// This is how a processor falls back to the default behavior for the
    /// value it was asked about, without being asked again.
    #[inline]
    pub const fn fallback(
        value: &'a dyn Reflect,
        registry: &'a TypeRegistry,
        processor: &'a P,
    ) -> Self {
        Self {
            value,
            registry,
            processor: Some(processor),
            skip_root_processor: true,
        }
    }

    #[inline]
    pub(super) const fn new_internal(
        value: &'a dyn Reflect,
        registry: &'a TypeRegistry,
        processor: Option<&'a P>,
    ) -> Self {
        Self {
            value,
            registry,
            processor,
            skip_root_processor: false,
        }
    }
}

impl<P: SerializeProcessor> Serialize for SerializeDriver<'_, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let serializer = match self.processor {
            Some(processor) if !self.skip_root_processor => {
                match processor.try_serialize(self.value, self.registry, serializer) {
                    Ok(result) => return result,
                    Err(serializer) => serializer, // Not handled, it's not a error.
                }
            }
            _ => serializer,
        };

        if let Some(p) = self
            .registry
            .get_type_trait::<TypeTraitSerialize>(self.value.ty_id())
        {
            return p.serialize(self.value, serializer);
        }

        match self.value.reflect_ref() {
            ReflectRef::Struct(struct_value) => StructSerializer {
                struct_value,
                registry: self.registry,
                processor: self.processor,
            }
            .serialize(serializer),
            ReflectRef::List(list) => ListSerializer {
                list,
                registry: self.registry,
                processor: self.processor,
            }
            .serialize(serializer),
            ReflectRef::Option(option) => match option.value() {
                Some(value) => serializer.serialize_some(&SerializeDriver::new_internal(
                    value,
                    self.registry,
                    self.processor,
                )),
                None => serializer.serialize_none(),
            },
            ReflectRef::Opaque(_) => Err(Error::custom(format_args!(
                "no serialization method available for opaque type `{}`",
                self.value.reflect_type_path(),
            ))),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
