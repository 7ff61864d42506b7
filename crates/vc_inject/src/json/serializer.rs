use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;

use serde_core::de::DeserializeSeed;
use serde_core::{Deserializer, Serialize, Serializer};
use vc_reflect::Reflect;
use vc_reflect::info::Typed;
use vc_reflect::registry::{TypeMeta, TypeRegistry};
use vc_reflect::serde::{
    DeserializeDriver, DeserializeProcessor, PopulateDriver, SerializeDriver, SerializeProcessor,
};

use super::{JsonError, JsonSettings};
use crate::JsonConverter;

// -----------------------------------------------------------------------------
// JsonSerializer

/// Reads and writes reflected values as JSON, offering every value to the
/// converters of its [`JsonSettings`] first.
///
/// Values no converter takes go through the reflection drivers: struct
/// members match exact names first and then ignore ASCII case, unknown
/// members are skipped, and `null` reads as `None`.
///
/// The serializer is `Send + Sync` and reentrant; converters call back into
/// it for nested values.
///
/// # Example
///
/// ```
/// use vc_inject::{JsonSerializer, JsonSettings};
/// use vc_reflect::registry::TypeTraitDefault;
///
/// #[derive(Default)]
/// struct Point { x: i32, y: i32 }
///
/// vc_reflect::impl_reflect_struct!(Point { x: i32, y: i32 } traits [TypeTraitDefault]);
///
/// let mut settings = JsonSettings::new();
/// settings.registry_mut().register::<Point>();
/// let json = JsonSerializer::new(settings);
///
/// let point: Point = json.from_str(r#"{"X": 3, "y": 4}"#).unwrap();
/// assert_eq!((point.x, point.y), (3, 4));
/// assert_eq!(json.to_string(&point).unwrap(), r#"{"x":3,"y":4}"#);
/// ```
pub struct JsonSerializer {
    settings: Arc<JsonSettings>,
}

impl JsonSerializer {
    #[inline]
    pub fn new(settings: JsonSettings) -> Self {
        Self::shared(Arc::new(settings))
    }

    /// Creates a serializer over settings shared with other serializers.
    #[inline]
    pub fn shared(settings: Arc<JsonSettings>) -> Self {
        Self { settings }
    }

    #[inline]
    pub fn settings(&self) -> &JsonSettings {
        &self.settings
    }

    #[inline]
    pub fn registry(&self) -> &TypeRegistry {
        self.settings.registry()
    }

    fn type_meta<T: Typed>(&self) -> Result<&TypeMeta, JsonError> {
        self.registry()
            .get(TypeId::of::<T>())
            .ok_or_else(|| JsonError::Unregistered {
                type_path: T::type_info().type_path(),
            })
    }

    fn read_converter(&self, type_meta: &TypeMeta) -> Option<&dyn JsonConverter> {
        self.settings
            .converters()
            .iter()
            .map(|converter| &**converter)
            .find(|converter| converter.can_read() && converter.can_convert(type_meta))
    }

    fn write_converter(&self, type_meta: &TypeMeta) -> Option<&dyn JsonConverter> {
        self.settings
            .converters()
            .iter()
            .map(|converter| &**converter)
            .find(|converter| converter.can_write() && converter.can_convert(type_meta))
    }

    // -------------------------------------------------------------------------
    // Read

    /// Reads a value of the type `type_meta` describes from any deserializer.
    pub fn read<'de, D: Deserializer<'de>>(
        &self,
        type_meta: &TypeMeta,
        deserializer: D,
    ) -> Result<Box<dyn Reflect>, D::Error> {
        DeserializeDriver::with_processor(type_meta, self.registry(), self).deserialize(deserializer)
    }

    /// Fills the members of `target` from any deserializer.
    ///
    /// Members absent from the input keep their current value.
    pub fn populate<'de, D: Deserializer<'de>>(
        &self,
        deserializer: D,
        target: &mut dyn Reflect,
    ) -> Result<(), D::Error> {
        PopulateDriver::with_processor(target, self.registry(), self).deserialize(deserializer)
    }

    /// Parses `json` as a `T`.
    pub fn from_str<T: Typed>(&self, json: &str) -> Result<T, JsonError> {
        let type_meta = self.type_meta::<T>()?;
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let value = self.read(type_meta, &mut deserializer)?;
        deserializer.end()?;
        take(value)
    }

    /// Converts a parsed JSON tree into a `T`.
    pub fn from_value<T: Typed>(&self, json: serde_json::Value) -> Result<T, JsonError> {
        let type_meta = self.type_meta::<T>()?;
        take(self.read(type_meta, json)?)
    }

    /// Fills the members of `target` from `json`.
    pub fn populate_str(&self, json: &str, target: &mut dyn Reflect) -> Result<(), JsonError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        self.populate(&mut deserializer, target)?;
        deserializer.end()?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Write

    /// Returns a [`Serialize`] view of `value` that consults the converters.
    #[inline]
    pub fn serialize_value<'a>(&'a self, value: &'a dyn Reflect) -> SerializeDriver<'a, Self> {
        SerializeDriver::with_processor(value, self.registry(), self)
    }

    /// Returns a [`Serialize`] view of `value` written with the default
    /// behavior, while nested values still consult the converters.
    ///
    /// This is the way back for a converter that does not alter writing.
    #[inline]
    pub fn serialize_default<'a>(&'a self, value: &'a dyn Reflect) -> SerializeDriver<'a, Self> {
        SerializeDriver::fallback(value, self.registry(), self)
    }

    pub fn to_string(&self, value: &dyn Reflect) -> Result<String, JsonError> {
        Ok(serde_json::to_string(&self.serialize_value(value))?)
    }

    pub fn to_string_pretty(&self, value: &dyn Reflect) -> Result<String, JsonError> {
        Ok(serde_json::to_string_pretty(&self.serialize_value(value))?)
    }

    pub fn to_value(&self, value: &dyn Reflect) -> Result<serde_json::Value, JsonError> {
        Ok(serde_json::to_value(self.serialize_value(value))?)
    }
}

fn take<T: Typed>(value: Box<dyn Reflect>) -> Result<T, JsonError> {
    value.take::<T>().map_err(|value| JsonError::TypeMismatch {
        expected: T::type_info().type_path(),
        actual: value.reflect_type_path(),
    })
}

// -----------------------------------------------------------------------------
// Processors

impl DeserializeProcessor for JsonSerializer {
    fn try_deserialize<'de, D: Deserializer<'de>>(
        &self,
        type_meta: &TypeMeta,
        _registry: &TypeRegistry,
        deserializer: D,
    ) -> Result<Result<Box<dyn Reflect>, D::Error>, D> {
        let Some(converter) = self.read_converter(type_meta) else {
            return Err(deserializer);
        };

        log::debug!("reading `{}` with a converter", type_meta.type_path());
        let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
        Ok(converter
            .read_json(type_meta, &mut erased, self)
            .map_err(<D::Error as serde_core::de::Error>::custom))
    }
}

impl SerializeProcessor for JsonSerializer {
    fn try_serialize<S: Serializer>(
        &self,
        value: &dyn Reflect,
        registry: &TypeRegistry,
        serializer: S,
    ) -> Result<Result<S::Ok, S::Error>, S> {
        let Some(converter) = registry
            .get(value.ty_id())
            .and_then(|type_meta| self.write_converter(type_meta))
        else {
            return Err(serializer);
        };

        log::debug!("writing `{}` with a converter", value.reflect_type_path());
        match converter.write_json(value, self) {
            Ok(view) => Ok((*view).serialize(serializer)),
            Err(err) => Ok(Err(<S::Error as serde_core::ser::Error>::custom(err))),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use vc_reflect::Reflect;
    use vc_reflect::registry::TypeMeta;

    use super::JsonSerializer;
    use crate::fixtures::{Both, Foo, SubClass, TestClass};
    use crate::{JsonConverter, JsonError, JsonSettings};

    struct Roster {
        names: Vec<String>,
        lead: Option<Foo>,
    }

    vc_reflect::impl_reflect_struct!(
        Roster { names: Vec<String>, lead: Option<Foo> }
        traits [vc_reflect::registry::TypeTraitDefault]
    );

    impl Default for Roster {
        fn default() -> Self {
            Self {
                names: Vec::from([String::from("kept")]),
                lead: None,
            }
        }
    }

    fn plain() -> JsonSerializer {
        let mut settings = JsonSettings::new();
        settings.registry_mut().register::<Roster>();
        settings.registry_mut().register::<TestClass>();
        JsonSerializer::new(settings)
    }

    #[test]
    fn default_path_without_converters() {
        let json = plain();
        let roster: Roster = json.from_str(r#"{"Names":["a","b"],"LEAD":{"x":2}}"#).unwrap();
        assert_eq!(roster.names, ["a", "b"]);
        assert_eq!(roster.lead.as_ref().map(|foo| foo.x), Some(2));

        let value = json.to_value(&roster).unwrap();
        assert_eq!(value, serde_json::json!({ "names": ["a", "b"], "lead": { "x": 2 } }));
    }

    #[test]
    fn populate_keeps_absent_members() {
        let json = plain();
        let mut roster = Roster::default();
        json.populate_str(r#"{"lead":{"x":5}}"#, &mut roster).unwrap();
        assert_eq!(roster.names, ["kept"]);
        assert_eq!(roster.lead.map(|foo| foo.x), Some(5));
    }

    #[test]
    fn from_value_reads_a_tree() {
        let json = plain();
        let roster: Roster = json
            .from_value(serde_json::json!({ "names": [], "lead": null }))
            .unwrap();
        assert!(roster.names.is_empty());
        assert!(roster.lead.is_none());
    }

    #[test]
    fn entry_point_errors() {
        let json = plain();
        assert!(matches!(
            json.from_str::<Foo>("{").err().unwrap(),
            JsonError::Json(_)
        ));
        assert!(matches!(
            json.from_str::<Both>("{}").err().unwrap(),
            JsonError::Unregistered { .. }
        ));
        assert!(matches!(
            json.from_str::<Roster>(r#"{"names":[]} trailing"#).err().unwrap(),
            JsonError::Json(_)
        ));

        // Without an injecting converter the type has no construction path.
        let err = json.from_str::<TestClass>("{}").err().unwrap();
        assert!(err.to_string().contains("no default construction path"));
    }

    struct Shout;

    impl JsonConverter for Shout {
        fn can_convert(&self, type_meta: &TypeMeta) -> bool {
            type_meta.type_id() == core::any::TypeId::of::<String>()
        }

        fn read_json<'de>(
            &self,
            _type_meta: &TypeMeta,
            reader: &mut dyn erased_serde::Deserializer<'de>,
            _serializer: &JsonSerializer,
        ) -> Result<Box<dyn Reflect>, erased_serde::Error> {
            let text: String = serde_core::Deserialize::deserialize(reader)?;
            Ok(Box::new(text.to_uppercase()))
        }

        fn write_json<'a>(
            &'a self,
            value: &'a dyn Reflect,
            _serializer: &'a JsonSerializer,
        ) -> Result<Box<dyn erased_serde::Serialize + 'a>, erased_serde::Error> {
            let text = value.downcast_ref::<String>().map(|text| text.to_lowercase());
            Ok(Box::new(text))
        }
    }

    #[test]
    fn converters_see_nested_values() {
        let mut settings = JsonSettings::new().with_converter(Shout);
        settings.registry_mut().register::<Roster>();
        let json = JsonSerializer::new(settings);

        let roster: Roster = json.from_str(r#"{"names":["ab","Cd"]}"#).unwrap();
        assert_eq!(roster.names, ["AB", "CD"]);
        assert_eq!(json.to_string(&roster).unwrap(), r#"{"names":["ab","cd"],"lead":null}"#);
    }

    #[test]
    fn serializer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonSerializer>();
        assert_send_sync::<SubClass>();
    }
}
