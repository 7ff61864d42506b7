use alloc::boxed::Box;
use alloc::sync::Arc;

use vc_reflect::Reflect;
use vc_reflect::registry::TypeMeta;

use super::{JsonConverter, read_injected};
use crate::json::JsonSerializer;
use crate::{ConstructibilityClassifier, Provider};

/// Injects every type the [`ConstructibilityClassifier`] accepts.
///
/// Types with a default construction, and value-like types, are left to the
/// serializer. Writing always uses the serializer's default behavior, so
/// skipped members such as the injected collaborators are never written.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vc_inject::{
///     InjectError, Injectable, JsonSerializer, JsonSettings, ServiceCollection,
///     ServiceProvider, TypeTraitInject, UniversalInjectingConverter,
/// };
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
///
/// let services = Arc::new(ServiceCollection::new().add_singleton(Clock { offset: 2 }).build());
///
/// let mut settings = JsonSettings::new()
///     .with_converter(UniversalInjectingConverter::new(services));
/// settings.registry_mut().register::<Job>();
/// let json = JsonSerializer::new(settings);
///
/// let job: Job = json.from_str(r#"{"name":"backup"}"#).unwrap();
/// assert_eq!(job.name, "backup");
/// assert_eq!(job.clock.offset, 2);
///
/// assert_eq!(json.to_string(&job).unwrap(), r#"{"name":"backup"}"#);
/// ```
pub struct UniversalInjectingConverter {
    provider: Arc<dyn Provider>,
    classifier: ConstructibilityClassifier,
}

impl UniversalInjectingConverter {
    /// Creates a converter with a fresh classifier.
    #[inline]
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self::with_classifier(provider, ConstructibilityClassifier::new())
    }

    /// Creates a converter with a prepared classifier, for example one with
    /// additional exclusions.
    #[inline]
    pub fn with_classifier(provider: Arc<dyn Provider>, classifier: ConstructibilityClassifier) -> Self {
        Self {
            provider,
            classifier,
        }
    }

    #[inline]
    pub fn classifier(&self) -> &ConstructibilityClassifier {
        &self.classifier
    }
}

impl JsonConverter for UniversalInjectingConverter {
    #[inline]
    fn can_convert(&self, type_meta: &TypeMeta) -> bool {
        self.classifier.accepts(type_meta)
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
        serializer: &'a JsonSerializer,
    ) -> Result<Box<dyn erased_serde::Serialize + 'a>, erased_serde::Error> {
        Ok(Box::new(serializer.serialize_default(value)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;
    use core::any::TypeId;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use vc_reflect::Reflect;
    use vc_reflect::registry::{GetTypeMeta, TypeMeta};

    use super::UniversalInjectingConverter;
    use crate::fixtures::{
        Both, Configuration, Foo, SAMPLE, SubClass, TestClass, serializer_with, services,
    };
    use crate::{InjectError, JsonConverter, JsonError, Provider, ServiceCollection};

    fn universal() -> UniversalInjectingConverter {
        UniversalInjectingConverter::new(Arc::new(services()))
    }

    #[test]
    fn nested_types_are_injected() {
        let json = serializer_with(universal());
        let result: TestClass = json.from_str(SAMPLE).unwrap();

        assert_eq!(result.configuration().get("test"), Some("value"));
        let sub = result.sub.as_ref().unwrap();
        assert_eq!(sub.configuration().get("test"), Some("value"));
        assert_eq!(sub.name, "Joe");
        assert_eq!(sub.foo.x, 13);
    }

    #[test]
    fn writes_only_reflected_members() {
        let json = serializer_with(universal());
        let result: TestClass = json.from_str(SAMPLE).unwrap();

        let text = json.to_string(&result).unwrap();
        assert_eq!(text, r#"{"sub":{"name":"Joe","foo":{"x":13}}}"#);
    }

    #[test]
    fn gate_follows_the_classifier() {
        let converter = universal();
        assert!(converter.can_convert(&TestClass::get_type_meta()));
        assert!(!converter.can_convert(&Foo::get_type_meta()));
        assert!(!converter.can_convert(&alloc::string::String::get_type_meta()));
        assert!(converter.can_read() && converter.can_write());
    }

    #[test]
    fn default_wins_over_injection() {
        let json = serializer_with(universal());
        let both: Both = json.from_str(r#"{"value":4}"#).unwrap();
        assert_eq!(both.value, 4);
        assert!(both.configuration.is_none());
    }

    #[test]
    fn null_and_missing_members() {
        let json = serializer_with(universal());

        let result: TestClass = json.from_str(r#"{"sub":null}"#).unwrap();
        assert!(result.sub.is_none());
        assert_eq!(result.configuration().get("test"), Some("value"));

        let result: TestClass = json.from_str(r#"{"Sub":{"foo":{}}}"#).unwrap();
        let sub = result.sub.unwrap();
        assert!(sub.name.is_empty());
        assert_eq!(sub.foo.x, 0);
    }

    #[test]
    fn unknown_members_are_ignored() {
        let json = serializer_with(universal());
        let result: TestClass =
            json.from_str(r#"{"extra":[1,{"a":null}],"Sub":{"Name":"Ann","Age":3}}"#).unwrap();
        assert_eq!(result.sub.unwrap().name, "Ann");
    }

    #[test]
    fn missing_service_propagates() {
        let empty = Arc::new(ServiceCollection::new().build());
        let json = serializer_with(UniversalInjectingConverter::new(empty));

        let err = json.from_str::<TestClass>(SAMPLE).err().unwrap();
        assert!(matches!(err, JsonError::Json(_)));
        assert!(err.to_string().contains(core::any::type_name::<Configuration>()));
    }

    #[test]
    fn malformed_documents_fail() {
        let json = serializer_with(universal());
        assert!(json.from_str::<TestClass>(r#"{"Sub":{"Name":"Joe""#).is_err());
        assert!(json.from_str::<TestClass>(r#"{"Sub":{"Name":5}}"#).is_err());
        assert!(json.from_str::<TestClass>(r#"[]"#).is_err());
    }

    struct FakeProvider {
        calls: AtomicUsize,
        configuration: Arc<Configuration>,
    }

    impl Provider for FakeProvider {
        fn construct(&self, type_meta: &TypeMeta) -> Result<Box<dyn Reflect>, InjectError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            let configuration = self.configuration.clone();
            if type_meta.type_id() == TypeId::of::<TestClass>() {
                Ok(Box::new(TestClass::with(configuration)))
            } else if type_meta.type_id() == TypeId::of::<SubClass>() {
                Ok(Box::new(SubClass::with(configuration)))
            } else {
                Err(InjectError::NotInjectable {
                    type_path: type_meta.type_path(),
                })
            }
        }
    }

    #[test]
    fn any_provider_can_be_plugged_in() {
        let provider = Arc::new(FakeProvider {
            calls: AtomicUsize::new(0),
            configuration: Arc::new(Configuration::from_pairs(&[("fake", "yes")])),
        });
        let json = serializer_with(UniversalInjectingConverter::new(provider.clone()));

        let result: TestClass = json.from_str(SAMPLE).unwrap();
        assert_eq!(provider.calls.load(Ordering::Relaxed), 2);
        assert_eq!(result.configuration().get("fake"), Some("yes"));
        assert_eq!(result.sub.unwrap().foo.x, 13);
    }
}
