use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::marker::PhantomData;

use serde_core::ser::Error;
use vc_reflect::Reflect;
use vc_reflect::info::Typed;
use vc_reflect::registry::TypeMeta;

use super::{JsonConverter, read_injected};
use crate::Provider;
use crate::json::JsonSerializer;

/// Injects the single type `T`, without classification.
///
/// The converter only reads. It reports [`can_write`](JsonConverter::can_write)
/// as `false`, so the serializer writes `T` with its default behavior, and
/// calling [`write_json`](JsonConverter::write_json) directly fails.
///
/// Register one converter per type; a type with a default construction is
/// still injected, unlike with the [`UniversalInjectingConverter`].
///
/// [`UniversalInjectingConverter`]: crate::UniversalInjectingConverter
pub struct TypedInjectingConverter<T: Typed> {
    provider: Arc<dyn Provider>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Typed> TypedInjectingConverter<T> {
    #[inline]
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            _marker: PhantomData,
        }
    }
}

impl<T: Typed> JsonConverter for TypedInjectingConverter<T> {
    #[inline]
    fn can_convert(&self, type_meta: &TypeMeta) -> bool {
        type_meta.type_id() == TypeId::of::<T>()
    }

    #[inline]
    fn can_write(&self) -> bool {
        false
    }

    fn read_json<'de>(
        &self,
        type_meta: &TypeMeta,
        reader: &mut dyn erased_serde::Deserializer<'de>,
        serializer: &JsonSerializer,
    ) -> Result<Box<dyn Reflect>, erased_serde::Error> {
        read_injected(&*self.provider, type_meta, reader, serializer)
    }

    fn write_json<'a>(
        &'a self,
        value: &'a dyn Reflect,
        _serializer: &'a JsonSerializer,
    ) -> Result<Box<dyn erased_serde::Serialize + 'a>, erased_serde::Error> {
        Err(erased_serde::Error::custom(format_args!(
            "converter for `{}` cannot write `{}`",
            T::type_info().type_path(),
            value.reflect_type_path(),
        )))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use vc_reflect::registry::GetTypeMeta;

    use super::TypedInjectingConverter;
    use crate::fixtures::{Both, Configuration, SAMPLE, SubClass, TestClass, services};
    use crate::{
        JsonConverter, JsonError, JsonSerializer, JsonSettings, ServiceCollection, ServiceProvider,
    };

    fn serializer(services: Arc<ServiceProvider>) -> JsonSerializer {
        let mut settings = JsonSettings::new()
            .with_converter(TypedInjectingConverter::<TestClass>::new(services.clone()))
            .with_converter(TypedInjectingConverter::<SubClass>::new(services));
        settings.registry_mut().register::<TestClass>();
        JsonSerializer::new(settings)
    }

    #[test]
    fn registered_types_are_injected() {
        let json = serializer(Arc::new(services()));
        let result: TestClass = json.from_str(SAMPLE).unwrap();

        assert_eq!(result.configuration().get("test"), Some("value"));
        let sub = result.sub.as_ref().unwrap();
        assert_eq!(sub.configuration().get("test"), Some("value"));
        assert_eq!(sub.name, "Joe");
        assert_eq!(sub.foo.x, 13);
    }

    #[test]
    fn writing_falls_back_to_the_default_path() {
        let json = serializer(Arc::new(services()));
        let result: TestClass = json.from_str(SAMPLE).unwrap();

        let text = json.to_string(&result).unwrap();
        assert_eq!(text, r#"{"sub":{"name":"Joe","foo":{"x":13}}}"#);
    }

    #[test]
    fn refuses_to_write() {
        let json = serializer(Arc::new(services()));
        let converter = TypedInjectingConverter::<SubClass>::new(Arc::new(services()));
        let sub = SubClass::with(Arc::default());

        assert!(!converter.can_write());
        assert!(converter.can_read());
        let err = converter.write_json(&sub, &json).err().unwrap();
        assert!(err.to_string().contains("cannot write"));
    }

    #[test]
    fn missing_service_propagates() {
        let json = serializer(Arc::new(ServiceCollection::new().build()));

        let err = json.from_str::<TestClass>(SAMPLE).err().unwrap();
        assert!(matches!(err, JsonError::Json(_)));
        assert!(err.to_string().contains(core::any::type_name::<Configuration>()));
    }

    #[test]
    fn malformed_documents_fail() {
        let json = serializer(Arc::new(services()));

        for document in [r#"{"Sub":{"Name":"Joe""#, r#"{"Sub":{"Name":5}}"#, "[]"] {
            let err = json.from_str::<TestClass>(document).err().unwrap();
            assert!(matches!(err, JsonError::Json(_)), "{document}");
        }
    }

    #[test]
    fn matches_exactly_one_type() {
        let converter = TypedInjectingConverter::<SubClass>::new(Arc::new(services()));
        assert!(converter.can_convert(&SubClass::get_type_meta()));
        assert!(!converter.can_convert(&TestClass::get_type_meta()));
        assert!(!converter.can_convert(&Option::<SubClass>::get_type_meta()));
    }

    #[test]
    fn injects_even_default_types() {
        let services = Arc::new(services());
        let mut settings =
            JsonSettings::new().with_converter(TypedInjectingConverter::<Both>::new(services));
        settings.registry_mut().register::<Both>();
        let json = JsonSerializer::new(settings);

        let both: Both = json.from_str(r#"{"value":8}"#).unwrap();
        assert_eq!(both.value, 8);
        assert!(both.configuration.is_some());
    }
}
