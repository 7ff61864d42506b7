use alloc::boxed::Box;
use core::any::TypeId;

use serde_core::Deserializer;
use serde_core::de::{DeserializeSeed, Error};

use super::list_visitor::ListVisitor;
use super::option_visitor::OptionVisitor;
use super::{DeserializeProcessor, PopulateDriver};

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::registry::{TypeMeta, TypeRegistry, TypeTraitDefault, TypeTraitDeserialize};

// -----------------------------------------------------------------------------
// DeserializeDriver

/// A deserializer for reflection types whose [`TypeMeta`] is known.
///
/// The driver follows a fixed priority:
///
/// 1. The [`DeserializeProcessor`], if it claims the type.
/// 2. The type's [`TypeTraitDeserialize`].
/// 3. Reflection, by kind:
///     - struct: construct with [`TypeTraitDefault`], then fill the members
///       in with a [`PopulateDriver`];
///     - option: `null` reads as `None`, anything else as `Some`;
///     - list: construct with [`TypeTraitDefault`], then push every item.
///
/// Opaque types without [`TypeTraitDeserialize`] cannot be read.
///
/// The produced value is always of the concrete type, ready for
/// [`take`](crate::Reflect::take).
///
/// # Example
///
/// ```
/// use vc_reflect::registry::{TypeRegistry, TypeTraitDefault};
/// use vc_reflect::serde::DeserializeDriver;
/// use serde_core::de::DeserializeSeed;
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// vc_reflect::impl_reflect_struct!(Point { x: i32, y: i32 } traits [TypeTraitDefault]);
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Point>();
///
/// let driver = DeserializeDriver::of::<Point>(&registry).unwrap();
/// let mut json = serde_json::Deserializer::from_str(r#"{ "x": 1, "Y": 2 }"#);
/// let point = driver.deserialize(&mut json).unwrap().take::<Point>().unwrap();
///
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
pub struct DeserializeDriver<'a, P: DeserializeProcessor = ()> {
    type_meta: &'a TypeMeta,
    registry: &'a TypeRegistry,
    processor: Option<&'a P>,
}

impl<'a> DeserializeDriver<'a, ()> {
    /// Creates a driver without processor.
    #[inline]
    pub const fn new(type_meta: &'a TypeMeta, registry: &'a TypeRegistry) -> Self {
        Self {
            type_meta,
            registry,
            processor: None,
        }
    }

    /// Creates a driver for `T`, or `None` if `T` is not registered.
    #[inline]
    pub fn of<T: Typed>(registry: &'a TypeRegistry) -> Option<Self> {
        let type_meta = registry.get(TypeId::of::<T>())?;
        Some(Self::new(type_meta, registry))
    }
}

impl<'a, P: DeserializeProcessor> DeserializeDriver<'a, P> {
    /// Creates a driver consulting `processor` for every value it reads.
    #[inline]
    pub const fn with_processor(
        type_meta: &'a TypeMeta,
        registry: &'a TypeRegistry,
        processor: &'a P,
    ) -> Self {
        Self {
            type_meta,
            registry,
            processor: Some(processor),
        }
    }

    #[inline]
    pub(super) const fn new_internal(
        type_meta: &'a TypeMeta,
        registry: &'a TypeRegistry,
        processor: Option<&'a P>,
    ) -> Self {
        Self {
            type_meta,
            registry,
            processor,
        }
    }
}

/// Builds the default instance of a type, the starting point of
/// reflection-based reads.
pub(super) fn construct_default<E: Error>(type_meta: &TypeMeta) -> Result<Box<dyn Reflect>, E> {
    match type_meta.get_trait::<TypeTraitDefault>() {
        Some(generator) => Ok(generator.default()),
        None => Err(E::custom(format_args!(
            "no default construction path for type `{}`",
            type_meta.type_path(),
        ))),
    }
}

impl<'de, P: DeserializeProcessor> DeserializeSeed<'de> for DeserializeDriver<'_, P> {
    type Value = Box<dyn Reflect>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let deserializer = if let Some(processor) = self.processor {
            match processor.try_deserialize(self.type_meta, self.registry, deserializer) {
                Ok(result) => return result,
                Err(deserializer) => deserializer, // Not handled, it's not a error.
            }
        } else {
            deserializer
        };

        if let Some(deserialize_reflect) = self.type_meta.get_trait::<TypeTraitDeserialize>() {
            return deserialize_reflect.deserialize(deserializer);
        }

        match self.type_meta.type_info() {
            TypeInfo::Struct(_) => {
                let mut value = construct_default::<D::Error>(self.type_meta)?;
                PopulateDriver::new_internal(&mut *value, self.registry, self.processor)
                    .deserialize(deserializer)?;
                Ok(value)
            }
            TypeInfo::Option(option_info) => deserializer.deserialize_option(OptionVisitor {
                type_meta: self.type_meta,
                option_info,
                registry: self.registry,
                processor: self.processor,
            }),
            TypeInfo::List(list_info) => deserializer.deserialize_seq(ListVisitor {
                type_meta: self.type_meta,
                list_info,
                registry: self.registry,
                processor: self.processor,
            }),
            TypeInfo::Opaque(_) => Err(Error::custom(format_args!(
                "no deserialization method available for opaque type `{}`",
                self.type_meta.type_path(),
            ))),
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
    use core::any::TypeId;

    use serde_core::Deserializer;
    use serde_core::de::DeserializeSeed;

    use super::DeserializeDriver;
    use crate::Reflect;
    use crate::info::Typed;
    use crate::registry::{
        TypeMeta, TypeRegistry, TypeTraitDefault, TypeTraitDeserialize, TypeTraitSerialize,
    };
    use crate::serde::DeserializeProcessor;

    #[derive(Default, Debug, PartialEq)]
    struct Inner {
        value: i32,
    }

    #[derive(Default, Debug, PartialEq)]
    struct Outer {
        name: String,
        inner: Inner,
        maybe: Option<Inner>,
        list: Vec<u8>,
        secret: u32,
    }

    crate::impl_reflect_struct!(Inner { value: i32 } traits [TypeTraitDefault]);
    crate::impl_reflect_struct!(
        Outer { name: String, inner: Inner, maybe: Option<Inner>, list: Vec<u8> }
        skip [secret]
        traits [TypeTraitDefault]
    );

    struct NoDefault {
        value: i32,
    }

    crate::impl_reflect_struct!(NoDefault { value: i32 });

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Outer>();
        registry.register::<NoDefault>();
        registry
    }

    fn read<T: Reflect + Typed>(registry: &TypeRegistry, json: &str) -> Result<T, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_str(json);
        let value = DeserializeDriver::of::<T>(registry)
            .unwrap()
            .deserialize(&mut de)?;
        de.end()?;
        Ok(value.take::<T>().unwrap())
    }

    #[test]
    fn struct_members_are_matched_ignoring_case() {
        let registry = registry();
        let outer: Outer = read(
            &registry,
            r#"{"NAME":"joe","Inner":{"VALUE":3},"maybe":{"value":4},"list":[1,2]}"#,
        )
        .unwrap();

        assert_eq!(outer.name, "joe");
        assert_eq!(outer.inner, Inner { value: 3 });
        assert_eq!(outer.maybe, Some(Inner { value: 4 }));
        assert_eq!(outer.list, [1, 2]);
    }

    #[test]
    fn unknown_and_skipped_members_are_ignored() {
        let registry = registry();
        let outer: Outer = read(
            &registry,
            r#"{"extra":{"deep":[1,{"x":null}]},"secret":7,"name":"a"}"#,
        )
        .unwrap();

        assert_eq!(outer.name, "a");
        assert_eq!(outer.secret, 0);
    }

    #[test]
    fn null_reads_as_none() {
        let registry = registry();
        let outer: Outer = read(&registry, r#"{"maybe":null}"#).unwrap();
        assert_eq!(outer.maybe, None);
    }

    #[test]
    fn missing_default_is_an_error() {
        let registry = registry();
        let err = read::<NoDefault>(&registry, r#"{"value":1}"#).err().unwrap();
        assert!(err.to_string().contains("no default construction path"));
    }

    #[test]
    fn mismatched_shapes_are_errors() {
        let registry = registry();
        assert!(read::<Outer>(&registry, r#"{"name":5}"#).is_err());
        assert!(read::<Outer>(&registry, r#"[1,2]"#).is_err());
        assert!(read::<Outer>(&registry, r#"{"name":"a""#).is_err());
    }

    #[test]
    fn format_agnostic() {
        let registry = registry();
        let meta = registry.get(TypeId::of::<Outer>()).unwrap();
        let mut de = ron::Deserializer::from_str(r#"(name: "ron", inner: (value: 9), list: [5])"#).unwrap();
        let outer = DeserializeDriver::new(meta, &registry)
            .deserialize(&mut de)
            .unwrap()
            .take::<Outer>()
            .unwrap();

        assert_eq!(outer.name, "ron");
        assert_eq!(outer.inner.value, 9);
        assert_eq!(outer.list, [5]);
    }

    #[derive(Default, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Rgb(u8, u8, u8);

    crate::impl_reflect_opaque!(Rgb: TypeTraitDefault, TypeTraitSerialize, TypeTraitDeserialize);

    #[derive(Default)]
    struct Palette {
        main: Rgb,
    }

    crate::impl_reflect_struct!(Palette { main: Rgb } traits [TypeTraitDefault]);

    #[test]
    fn opaque_types_use_their_own_serde() {
        let mut registry = TypeRegistry::new();
        registry.register::<Palette>();

        let palette: Palette = read(&registry, r#"{"Main":[1,2,3]}"#).unwrap();
        assert_eq!(palette.main, Rgb(1, 2, 3));

        let text = serde_json::to_string(&crate::serde::SerializeDriver::new(&palette, &registry));
        assert_eq!(text.unwrap(), r#"{"main":[1,2,3]}"#);
    }

    struct CountInner {
        seen: core::cell::Cell<usize>,
    }

    impl DeserializeProcessor for CountInner {
        fn try_deserialize<'de, D: Deserializer<'de>>(
            &self,
            type_meta: &TypeMeta,
            _registry: &TypeRegistry,
            deserializer: D,
        ) -> Result<Result<Box<dyn Reflect>, D::Error>, D> {
            if type_meta.type_id() == TypeId::of::<Inner>() {
                self.seen.set(self.seen.get() + 1);
                let value = <i32 as serde_core::Deserialize>::deserialize(deserializer);
                return Ok(value.map(|value| Inner { value }.into_boxed_reflect()));
            }
            Err(deserializer)
        }
    }

    #[test]
    fn processor_sees_nested_values() {
        let registry = registry();
        let meta = registry.get(TypeId::of::<Outer>()).unwrap();
        let processor = CountInner {
            seen: core::cell::Cell::new(0),
        };

        let mut de = serde_json::Deserializer::from_str(r#"{"inner":1,"maybe":2}"#);
        let outer = DeserializeDriver::with_processor(meta, &registry, &processor)
            .deserialize(&mut de)
            .unwrap()
            .take::<Outer>()
            .unwrap();

        assert_eq!(outer.inner, Inner { value: 1 });
        assert_eq!(outer.maybe, Some(Inner { value: 2 }));
        assert_eq!(processor.seen.get(), 2);
    }
}
