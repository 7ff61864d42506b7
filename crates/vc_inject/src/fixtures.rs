//! Types shared by the unit tests.

use alloc::string::{String, ToString};
use alloc::sync::Arc;

use vc_reflect::registry::TypeTraitDefault;
use vc_utils::hash::HashMap;

use crate::{
    InjectError, Injectable, JsonConverter, JsonSerializer, JsonSettings, ServiceCollection,
    ServiceProvider, TypeTraitInject,
};

pub const SAMPLE: &str = r#"
{
    "Sub": {
        "Name": "Joe",
        "Foo": {
            "x": 13
        }
    }
}"#;

/// In-memory key/value configuration, the injected collaborator.
#[derive(Default)]
pub struct Configuration {
    values: HashMap<String, String>,
}

impl Configuration {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[derive(Default)]
pub struct Foo {
    pub x: i32,
}

vc_reflect::impl_reflect_struct!(Foo { x: i32 } traits [TypeTraitDefault]);

pub struct SubClass {
    pub name: String,
    pub foo: Foo,
    configuration: Arc<Configuration>,
}

vc_reflect::impl_reflect_struct!(
    SubClass { name: String, foo: Foo }
    skip [configuration]
    traits [TypeTraitInject]
);

impl SubClass {
    pub fn with(configuration: Arc<Configuration>) -> Self {
        Self {
            name: String::new(),
            foo: Foo::default(),
            configuration,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

impl Injectable for SubClass {
    fn inject(services: &ServiceProvider) -> Result<Self, InjectError> {
        Ok(Self::with(services.get_required::<Configuration>()?))
    }
}

pub struct TestClass {
    pub sub: Option<SubClass>,
    configuration: Arc<Configuration>,
}

vc_reflect::impl_reflect_struct!(
    TestClass { sub: Option<SubClass> }
    skip [configuration]
    traits [TypeTraitInject]
);

impl TestClass {
    pub fn with(configuration: Arc<Configuration>) -> Self {
        Self {
            sub: None,
            configuration,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

impl Injectable for TestClass {
    fn inject(services: &ServiceProvider) -> Result<Self, InjectError> {
        Ok(Self::with(services.get_required::<Configuration>()?))
    }
}

/// Both default-constructible and injectable.
#[derive(Default)]
pub struct Both {
    pub value: i32,
    pub configuration: Option<Arc<Configuration>>,
}

vc_reflect::impl_reflect_struct!(
    Both { value: i32 }
    skip [configuration]
    traits [TypeTraitDefault, TypeTraitInject]
);

impl Injectable for Both {
    fn inject(services: &ServiceProvider) -> Result<Self, InjectError> {
        Ok(Self {
            value: 0,
            configuration: Some(services.get_required::<Configuration>()?),
        })
    }
}

pub fn services() -> ServiceProvider {
    ServiceCollection::new()
        .add_singleton(Configuration::from_pairs(&[("test", "value")]))
        .build()
}

pub fn serializer_with(converter: impl JsonConverter + 'static) -> JsonSerializer {
    let mut settings = JsonSettings::new().with_converter(converter);
    settings.registry_mut().register::<TestClass>();
    settings.registry_mut().register::<Both>();
    JsonSerializer::new(settings)
}
