use serde_core::ser::{Error, SerializeStruct};
use serde_core::{Serialize, Serializer};

use super::{SerializeDriver, SerializeProcessor};

use crate::info::TypeInfo;
use crate::ops::Struct;
use crate::registry::TypeRegistry;

pub(super) struct StructSerializer<'a, P: SerializeProcessor> {
    pub struct_value: &'a dyn Struct,
    pub registry: &'a TypeRegistry,
    pub processor: Option<&'a P>,
}

impl<P: SerializeProcessor> Serialize for StructSerializer<'_, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let type_info = self.struct_value.reflect_type_info();
        let TypeInfo::Struct(struct_info) = type_info else {
            return Err(Error::custom(format_args!(
                "expected struct but received {}",
                type_info.kind(),
            )));
        };

        // Skipped members are not reflected, so every field here is written.
        let mut state = serializer.serialize_struct(struct_info.ident(), struct_info.field_len())?;

        for &name in struct_info.field_names() {
            let Some(value) = self.struct_value.field(name) else {
                return Err(Error::custom(format_args!(
                    "field `{name}` was missing while serializing type {}",
                    struct_info.type_path(),
                )));
            };
            state.serialize_field(
                name,
                &SerializeDriver::new_internal(value, self.registry, self.processor),
            )?;
        }

        state.end()
    }
}
