use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use vc_utils::TypeIdMap;

use crate::info::{ReflectKind, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

/// What the [`TypeRegistry`] knows about one type.
///
/// Pairs the static [`TypeInfo`] with a table of [`TypeTrait`]s keyed by the
/// trait's own type. The table answers runtime questions the type system
/// cannot, such as "is there a `Default`?" for a type only known by id.
///
/// ```
/// # use vc_reflect::registry::{TypeMeta, TypeTraitDefault, FromType};
/// let mut meta = TypeMeta::of::<String>();
/// assert!(!meta.has_trait::<TypeTraitDefault>());
///
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
/// let made = meta.get_trait::<TypeTraitDefault>().unwrap().default();
/// assert_eq!(made.take::<String>().unwrap(), "");
/// ```
pub struct TypeMeta {
    info: &'static TypeInfo,
    traits: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// A meta for `T` with no type traits yet.
    pub fn of<T: Typed>() -> Self {
        Self {
            info: T::type_info(),
            traits: TypeIdMap::new(),
        }
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.info.type_id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        self.info.kind()
    }

    /// Stores `type_trait`. A previous trait of the same type is dropped.
    pub fn insert_trait<T: TypeTrait>(&mut self, type_trait: T) {
        self.traits.insert_type::<T>(Box::new(type_trait));
    }

    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        let type_trait: &dyn TypeTrait = &**self.traits.get_type::<T>()?;
        type_trait.downcast_ref::<T>()
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.traits.contains_type::<T>()
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path())
            .field("kind", &self.kind())
            .field("traits", &self.traits.len())
            .finish()
    }
}

/// Produces the [`TypeMeta`] a type is registered with.
///
/// The reflection macros implement it and insert the type traits listed in
/// their `traits [..]` section. Field types are registered by
/// [`register_dependencies`](GetTypeMeta::register_dependencies).
///
/// ```
/// use vc_reflect::registry::{FromType, GetTypeMeta, TypeTraitDefault};
///
/// #[derive(Default)]
/// struct A {
///     value: i32,
/// }
///
/// vc_reflect::impl_reflect_struct!(A { value: i32 });
///
/// let mut meta = A::get_type_meta();
/// assert!(!meta.has_trait::<TypeTraitDefault>());
///
/// meta.insert_trait::<TypeTraitDefault>(FromType::<A>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be registered because it does not implement `GetTypeMeta`",
    note = "reflect it with `vc_reflect::impl_reflect_struct!` or `vc_reflect::impl_reflect_opaque!`"
)]
pub trait GetTypeMeta: Typed {
    fn get_type_meta() -> TypeMeta;

    /// Registers the types this one refers to. `Self` is registered by the
    /// caller.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
