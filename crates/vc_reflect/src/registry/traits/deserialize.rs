use alloc::boxed::Box;

use serde_core::{Deserialize, Deserializer};

use crate::Reflect;
use crate::info::Typed;
use crate::registry::FromType;

/// A [`TypeTrait`] that deserializes a type with its own [`Deserialize`] impl.
///
/// The deserialize driver prefers it over reflection-based deserialization.
///
/// [`TypeTrait`]: crate::registry::TypeTrait
#[derive(Clone)]
pub struct TypeTraitDeserialize {
    func: fn(
        deserializer: &mut dyn erased_serde::Deserializer,
    ) -> Result<Box<dyn Reflect>, erased_serde::Error>,
}

impl TypeTraitDeserialize {
    /// Deserializes a value of the underlying type.
    #[inline(always)]
    pub fn deserialize<'de, D: Deserializer<'de>>(
        &self,
        deserializer: D,
    ) -> Result<Box<dyn Reflect>, D::Error> {
        let mut erased = <dyn erased_serde::Deserializer>::erase(deserializer);
        (self.func)(&mut erased).map_err(<D::Error as serde_core::de::Error>::custom)
    }
}

impl<T: for<'a> Deserialize<'a> + Typed + Reflect> FromType<T> for TypeTraitDeserialize {
    fn from_type() -> Self {
        Self {
            func: |deserializer| Ok(Box::new(T::deserialize(deserializer)?)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeTraitDeserialize;
    use crate::registry::FromType;

    #[test]
    fn deserialize_through_erased() {
        let de = <TypeTraitDeserialize as FromType<u16>>::from_type();
        let mut json = serde_json::Deserializer::from_str("513");
        let value = de.deserialize(&mut json).unwrap();
        assert_eq!(value.take::<u16>().unwrap(), 513);
    }

    #[test]
    fn errors_keep_the_format_message() {
        let de = <TypeTraitDeserialize as FromType<u8>>::from_type();
        let mut json = serde_json::Deserializer::from_str("\"text\"");
        let err = de.deserialize(&mut json).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }
}
