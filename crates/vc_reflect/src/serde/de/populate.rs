use alloc::string::{String, ToString};
use core::fmt;

use serde_core::de::{DeserializeSeed, Error, IgnoredAny, MapAccess, Visitor};
use serde_core::{Deserialize, Deserializer};

use super::{DeserializeDriver, DeserializeProcessor};

use crate::Reflect;
use crate::info::{StructInfo, TypeInfo};
use crate::ops::ReflectMut;
use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// PopulateDriver

/// Fills the members of an existing struct instance from a data format.
///
/// Member names are matched with [`StructInfo::resolve_field`], exact first
/// and then ignoring ASCII case. Members the struct does not reflect, and
/// members declared as skipped, are consumed and ignored. Members absent
/// from the input keep the value the instance already holds.
///
/// Each member value is read with a [`DeserializeDriver`], sharing the same
/// registry and processor.
///
/// # Example
///
/// ```
/// use serde_core::de::DeserializeSeed;
/// use vc_reflect::registry::TypeRegistry;
/// use vc_reflect::serde::PopulateDriver;
///
/// struct Settings {
///     depth: u8,
///     name: String,
/// }
///
/// vc_reflect::impl_reflect_struct!(Settings { depth: u8, name: String });
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Settings>();
///
/// let mut settings = Settings { depth: 1, name: "kept".into() };
/// let mut json = serde_json::Deserializer::from_str(r#"{"Depth": 4, "other": true}"#);
/// PopulateDriver::new(&mut settings, &registry).deserialize(&mut json).unwrap();
///
/// assert_eq!(settings.depth, 4);
/// assert_eq!(settings.name, "kept");
/// ```
pub struct PopulateDriver<'a, P: DeserializeProcessor = ()> {
    target: &'a mut dyn Reflect,
    registry: &'a TypeRegistry,
    processor: Option<&'a P>,
}

impl<'a> PopulateDriver<'a, ()> {
    /// Creates a driver without processor.
    #[inline]
    pub fn new(target: &'a mut dyn Reflect, registry: &'a TypeRegistry) -> Self {
        Self {
            target,
            registry,
            processor: None,
        }
    }
}

impl<'a, P: DeserializeProcessor> PopulateDriver<'a, P> {
    /// Creates a driver consulting `processor` for every member value.
    #[inline]
    pub fn with_processor(
        target: &'a mut dyn Reflect,
        registry: &'a TypeRegistry,
        processor: &'a P,
    ) -> Self {
        Self {
            target,
            registry,
            processor: Some(processor),
        }
    }

    #[inline]
    pub(super) fn new_internal(
        target: &'a mut dyn Reflect,
        registry: &'a TypeRegistry,
        processor: Option<&'a P>,
    ) -> Self {
        Self {
            target,
            registry,
            processor,
        }
    }
}

impl<'de, P: DeserializeProcessor> DeserializeSeed<'de> for PopulateDriver<'_, P> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        let struct_info = match self.target.reflect_type_info() {
            TypeInfo::Struct(info) => info,
            info => {
                return Err(Error::custom(format_args!(
                    "cannot populate `{}`: only structs have members, found {}",
                    info.type_path(),
                    info.kind(),
                )));
            }
        };

        deserializer.deserialize_struct(
            struct_info.ident(),
            struct_info.field_names(),
            PopulateVisitor {
                struct_info,
                target: self.target,
                registry: self.registry,
                processor: self.processor,
            },
        )
    }
}

// -----------------------------------------------------------------------------
// Ident parser

#[derive(Debug, Clone, Eq, PartialEq)]
struct Ident(String);

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdentVisitor;

        impl<'de> Visitor<'de> for IdentVisitor {
            type Value = Ident;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("identifier")
            }

            #[inline]
            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Ident(value.to_string()))
            }

            #[inline]
            fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
                Ok(Ident(value))
            }
        }

        deserializer.deserialize_identifier(IdentVisitor)
    }
}

// -----------------------------------------------------------------------------
// PopulateVisitor

struct PopulateVisitor<'a, P: DeserializeProcessor> {
    struct_info: &'static StructInfo,
    target: &'a mut dyn Reflect,
    registry: &'a TypeRegistry,
    processor: Option<&'a P>,
}

impl<'de, P: DeserializeProcessor> Visitor<'de> for PopulateVisitor<'_, P> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("reflected struct value of type ")?;
        formatter.write_str(self.struct_info.type_path())
    }

    fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<(), V::Error> {
        let type_path = self.struct_info.type_path();
        let ReflectMut::Struct(target) = self.target.reflect_mut() else {
            return Err(Error::custom(format_args!(
                "expected a struct value for `{type_path}`"
            )));
        };

        while let Some(Ident(key)) = map.next_key::<Ident>()? {
            if self.struct_info.is_skipped(&key) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            let Some(field) = self.struct_info.resolve_field(&key) else {
                log::debug!("ignoring unknown member `{key}` of `{type_path}`");
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            let Some(type_meta) = self.registry.get(field.type_id()) else {
                return Err(Error::custom(format_args!(
                    "no TypeMeta found for type `{}`",
                    field.type_path(),
                )));
            };

            let value = map.next_value_seed(DeserializeDriver::new_internal(
                type_meta,
                self.registry,
                self.processor,
            ))?;

            let Some(slot) = target.field_mut(field.name()) else {
                return Err(Error::custom(format_args!(
                    "field `{}` was missing while populating `{type_path}`",
                    field.name(),
                )));
            };

            slot.set(value).map_err(|value| {
                Error::custom(format_args!(
                    "mismatched value for field `{}` of `{type_path}`: expected `{}`, found `{}`",
                    field.name(),
                    field.type_path(),
                    value.reflect_type_path(),
                ))
            })?;
        }

        Ok(())
    }
}
