/// Implements reflection for a value-like type whose internals stay hidden.
///
/// Generates [`Typed`], [`Reflect`] and [`GetTypeMeta`]. The optional list
/// after the colon names [`TypeTrait`]s inserted into the type's
/// [`TypeMeta`]; each must implement [`FromType`] for the type.
///
/// # Examples
///
/// ```
/// use vc_reflect::registry::{GetTypeMeta, TypeTraitDefault};
///
/// #[derive(Default)]
/// struct Token(u64);
///
/// vc_reflect::impl_reflect_opaque!(Token: TypeTraitDefault);
///
/// assert!(Token::get_type_meta().has_trait::<TypeTraitDefault>());
/// ```
///
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`GetTypeMeta`]: crate::registry::GetTypeMeta
/// [`TypeTrait`]: crate::registry::TypeTrait
/// [`TypeMeta`]: crate::registry::TypeMeta
/// [`FromType`]: crate::registry::FromType
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($ty:ty $(: $($type_trait:path),+ $(,)?)?) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<$ty>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
                <Self as $crate::info::Typed>::type_info()
            }

            $crate::__impl_reflect_cast_fn!(Opaque);
        }

        impl $crate::registry::GetTypeMeta for $ty {
            fn get_type_meta() -> $crate::registry::TypeMeta {
                #[allow(unused_mut, reason = "no type trait listed")]
                let mut meta = $crate::registry::TypeMeta::of::<Self>();
                $($(
                    meta.insert_trait::<$type_trait>(
                        <$type_trait as $crate::registry::FromType<Self>>::from_type(),
                    );
                )+)?
                meta
            }
        }
    };
}

/// Implements reflection for a struct with named fields.
///
/// Generates [`Typed`], [`Reflect`], [`Struct`] and [`GetTypeMeta`].
///
/// - The braces list the reflected fields with their types. Every field type
///   must itself be reflected, and is registered along with the struct.
/// - `skip [..]` names members that exist on the struct but never travel
///   through a data format, such as injected collaborators.
/// - `traits [..]` names [`TypeTrait`]s inserted into the [`TypeMeta`].
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
/// use vc_reflect::registry::{GetTypeMeta, TypeTraitDefault};
///
/// #[derive(Default)]
/// struct Player {
///     name: String,
///     score: u32,
///     session: Option<std::sync::Arc<()>>,
/// }
///
/// vc_reflect::impl_reflect_struct!(
///     Player { name: String, score: u32 }
///     skip [session]
///     traits [TypeTraitDefault]
/// );
///
/// let info = Player::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names(), &["name", "score"]);
/// assert!(info.is_skipped("Session"));
/// assert!(Player::get_type_meta().has_trait::<TypeTraitDefault>());
/// ```
///
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`GetTypeMeta`]: crate::registry::GetTypeMeta
/// [`TypeTrait`]: crate::registry::TypeTrait
/// [`TypeMeta`]: crate::registry::TypeMeta
#[macro_export]
macro_rules! impl_reflect_struct {
    (
        $name:ident { $($field:ident : $field_ty:ty),* $(,)? }
        $(skip [$($skipped:ident),* $(,)?])?
        $(traits [$($type_trait:path),* $(,)?])?
    ) => {
        impl $crate::info::Typed for $name {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Struct(
                        $crate::info::StructInfo::new::<$name>(
                            ::core::stringify!($name),
                            &[$(
                                $crate::info::NamedField::new::<$field_ty>(::core::stringify!($field)),
                            )*],
                        )
                        .with_skipped(&[$($(::core::stringify!($skipped)),*)?]),
                    )
                })
            }
        }

        impl $crate::Reflect for $name {
            #[inline]
            fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
                <Self as $crate::info::Typed>::type_info()
            }

            $crate::__impl_reflect_cast_fn!(Struct);
        }

        impl $crate::ops::Struct for $name {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::Reflect> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(&self.$field);
                    }
                )*
                ::core::option::Option::None
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn $crate::Reflect> {
                $(
                    if name == ::core::stringify!($field) {
                        return ::core::option::Option::Some(&mut self.$field);
                    }
                )*
                ::core::option::Option::None
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn $crate::Reflect> {
                let name = $crate::ops::Struct::name_at(self, index)?;
                $crate::ops::Struct::field(self, name)
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&'static str> {
                const NAMES: &[&str] = &[$(::core::stringify!($field)),*];
                NAMES.get(index).copied()
            }

            #[inline]
            fn field_len(&self) -> usize {
                const NAMES: &[&str] = &[$(::core::stringify!($field)),*];
                NAMES.len()
            }
        }

        impl $crate::registry::GetTypeMeta for $name {
            fn get_type_meta() -> $crate::registry::TypeMeta {
                #[allow(unused_mut, reason = "no type trait listed")]
                let mut meta = $crate::registry::TypeMeta::of::<Self>();
                $($(
                    meta.insert_trait::<$type_trait>(
                        <$type_trait as $crate::registry::FromType<Self>>::from_type(),
                    );
                )*)?
                meta
            }

            fn register_dependencies(_registry: &mut $crate::registry::TypeRegistry) {
                $( _registry.register::<$field_ty>(); )*
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::{ReflectRef, Struct};
    use crate::registry::{GetTypeMeta, TypeTraitDefault};

    #[derive(Default)]
    struct Sample {
        id: u32,
        label: String,
        cache: Option<u64>,
    }

    crate::impl_reflect_struct!(
        Sample { id: u32, label: String }
        skip [cache]
        traits [TypeTraitDefault]
    );

    #[test]
    fn struct_fields_by_name_and_index() {
        let mut sample = Sample {
            id: 3,
            label: String::from("x"),
            cache: Some(9),
        };

        assert_eq!(sample.field_len(), 2);
        assert_eq!(sample.name_at(0), Some("id"));
        assert!(sample.name_at(2).is_none());
        assert!(sample.field("cache").is_none());
        assert_eq!(
            sample.field_at(1).and_then(|v| v.downcast_ref::<String>()),
            Some(&String::from("x"))
        );

        *sample.field_mut("id").unwrap().downcast_mut::<u32>().unwrap() = 4;
        assert_eq!(sample.id, 4);
        assert_eq!(sample.cache, Some(9));

        let ReflectRef::Struct(dyn_struct) = sample.reflect_ref() else {
            panic!("expected struct");
        };
        let names: alloc::vec::Vec<_> = dyn_struct.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "label"]);
    }

    #[test]
    fn struct_info_and_meta() {
        let info = Sample::type_info().as_struct().unwrap();
        assert_eq!(info.ident(), "Sample");
        assert_eq!(info.skipped(), &["cache"]);
        assert!(info.field("id").unwrap().type_is::<u32>());

        let meta = Sample::get_type_meta();
        assert!(meta.has_trait::<TypeTraitDefault>());
        let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
        assert!(value.is::<Sample>());
    }
}
