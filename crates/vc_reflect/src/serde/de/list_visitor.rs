use alloc::boxed::Box;
use core::fmt;

use serde_core::de::{Error, SeqAccess, Visitor};

use super::driver::construct_default;
use super::{DeserializeDriver, DeserializeProcessor};

use crate::Reflect;
use crate::info::ListInfo;
use crate::ops::ReflectMut;
use crate::registry::{TypeMeta, TypeRegistry};

pub(super) struct ListVisitor<'a, P: DeserializeProcessor> {
    pub type_meta: &'a TypeMeta,
    pub list_info: &'static ListInfo,
    pub registry: &'a TypeRegistry,
    pub processor: Option<&'a P>,
}

impl<'de, P: DeserializeProcessor> Visitor<'de> for ListVisitor<'_, P> {
    type Value = Box<dyn Reflect>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("reflected list value of type ")?;
        formatter.write_str(self.list_info.type_path())
    }

    fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
        let item_ty = self.list_info.item_ty();
        let Some(item_meta) = self.registry.get(item_ty.id()) else {
            return Err(Error::custom(format_args!(
                "no TypeMeta found for type `{}`",
                item_ty.path(),
            )));
        };

        let mut value = construct_default::<V::Error>(self.type_meta)?;
        {
            let ReflectMut::List(list) = value.reflect_mut() else {
                return Err(Error::custom(format_args!(
                    "expected a list value for `{}`",
                    self.list_info.type_path(),
                )));
            };

            while let Some(item) = seq.next_element_seed(DeserializeDriver::new_internal(
                item_meta,
                self.registry,
                self.processor,
            ))? {
                list.push(item).map_err(|item| {
                    Error::custom(format_args!(
                        "mismatched item for `{}`: found `{}`",
                        self.list_info.type_path(),
                        item.reflect_type_path(),
                    ))
                })?;
            }
        }

        Ok(value)
    }
}
