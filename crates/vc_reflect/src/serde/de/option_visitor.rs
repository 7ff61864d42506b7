use alloc::boxed::Box;
use core::fmt;

use serde_core::Deserializer;
use serde_core::de::{DeserializeSeed, Error, Visitor};

use super::driver::construct_default;
use super::{DeserializeDriver, DeserializeProcessor};

use crate::Reflect;
use crate::info::OptionInfo;
use crate::ops::ReflectMut;
use crate::registry::{TypeMeta, TypeRegistry};

pub(super) struct OptionVisitor<'a, P: DeserializeProcessor> {
    pub type_meta: &'a TypeMeta,
    pub option_info: &'static OptionInfo,
    pub registry: &'a TypeRegistry,
    pub processor: Option<&'a P>,
}

impl<'de, P: DeserializeProcessor> Visitor<'de> for OptionVisitor<'_, P> {
    type Value = Box<dyn Reflect>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("reflected option value of type ")?;
        formatter.write_str(self.option_info.type_path())
    }

    #[inline]
    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        construct_default(self.type_meta)
    }

    #[inline]
    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        construct_default(self.type_meta)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let some_ty = self.option_info.some_ty();
        let Some(type_meta) = self.registry.get(some_ty.id()) else {
            return Err(Error::custom(format_args!(
                "no TypeMeta found for type `{}`",
                some_ty.path(),
            )));
        };

        let inner = DeserializeDriver::new_internal(type_meta, self.registry, self.processor)
            .deserialize(deserializer)?;

        let mut value = construct_default::<D::Error>(self.type_meta)?;
        let ReflectMut::Option(option) = value.reflect_mut() else {
            return Err(Error::custom(format_args!(
                "expected an option value for `{}`",
                self.option_info.type_path(),
            )));
        };
        option.replace(inner).map_err(|inner| {
            Error::custom(format_args!(
                "mismatched value for `{}`: found `{}`",
                self.option_info.type_path(),
                inner.reflect_type_path(),
            ))
        })?;

        Ok(value)
    }
}
