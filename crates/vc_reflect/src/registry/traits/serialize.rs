use serde_core::{Serialize, Serializer};

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// A [`TypeTrait`] that serializes a type with its own [`Serialize`] impl.
///
/// [`TypeTrait`]: crate::registry::TypeTrait
#[derive(Clone)]
pub struct TypeTraitSerialize {
    fun: fn(value: &dyn Reflect) -> Option<&dyn erased_serde::Serialize>,
}

impl<T: erased_serde::Serialize + Typed + Reflect> FromType<T> for TypeTraitSerialize {
    fn from_type() -> Self {
        Self {
            fun: |value| {
                value
                    .downcast_ref::<T>()
                    .map(|val| val as &dyn erased_serde::Serialize)
            },
        }
    }
}

impl TypeTraitSerialize {
    /// Serializes `value`, which must be of the type this trait was built for.
    pub fn serialize<S: Serializer>(
        &self,
        value: &dyn Reflect,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match (self.fun)(value) {
            Some(val) => val.serialize(serializer),
            None => Err(<S::Error as serde_core::ser::Error>::custom(format_args!(
                "serialize type trait used with mismatched value `{}`",
                value.reflect_type_path(),
            ))),
        }
    }
}
