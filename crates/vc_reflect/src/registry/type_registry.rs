use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use vc_utils::TypeIdMap;

use crate::registry::{GetTypeMeta, TypeMeta, TypeTrait};

/// The set of types the serde drivers can work with.
///
/// A driver that meets a field or item type looks up its [`TypeMeta`] here,
/// so every type reachable from a root has to be present. [`register`]
/// follows field types on its own, which makes registering the root enough.
///
/// [`register`]: TypeRegistry::register
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<Vec<u32>>();
///
/// assert!(registry.contains(TypeId::of::<Vec<u32>>()));
/// assert!(registry.contains(TypeId::of::<u32>()));
/// ```
pub struct TypeRegistry {
    metas: TypeIdMap<TypeMeta>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// A registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            metas: TypeIdMap::new(),
        }
    }

    /// A registry holding the primitives and `String`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        macro_rules! register_all {
            ($($ty:ty),*) => { $( registry.register::<$ty>(); )* };
        }
        register_all!(
            bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
            String
        );
        registry
    }

    /// Adds `T`, then the types it depends on.
    ///
    /// A type that is already present keeps its first [`TypeMeta`] and its
    /// dependencies are not visited again, so cyclic graphs terminate.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self
            .metas
            .try_insert(TypeId::of::<T>(), T::get_type_meta)
        {
            T::register_dependencies(self);
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.metas.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.metas.get(&type_id)
    }

    /// Shortcut for `get(type_id)` followed by [`TypeMeta::get_trait`].
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        self.get(type_id)?.get_trait::<T>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.metas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.metas.values().map(TypeMeta::type_path))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::registry::{TypeTraitDefault, TypeTraitDeserialize, TypeTraitSerialize};

    #[derive(Default)]
    struct Point {
        x: i64,
        tags: Vec<String>,
    }

    crate::impl_reflect_struct!(Point { x: i64, tags: Vec<String> } traits [TypeTraitDefault]);

    struct Node {
        children: Vec<Node>,
    }

    crate::impl_reflect_struct!(Node { children: Vec<Node> });

    #[test]
    fn new_registers_primitives_with_serde() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 17);
        for id in [TypeId::of::<i32>(), TypeId::of::<String>(), TypeId::of::<bool>()] {
            let meta = registry.get(id).unwrap();
            assert!(meta.has_trait::<TypeTraitSerialize>());
            assert!(meta.has_trait::<TypeTraitDeserialize>());
            assert!(meta.has_trait::<TypeTraitDefault>());
        }
    }

    #[test]
    fn register_pulls_in_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Point>();

        assert!(registry.contains(TypeId::of::<Point>()));
        assert!(registry.contains(TypeId::of::<i64>()));
        assert!(registry.contains(TypeId::of::<Vec<String>>()));
        assert!(registry.contains(TypeId::of::<String>()));
        assert_eq!(registry.len(), 4);
        assert!(
            registry
                .get_type_trait::<TypeTraitDefault>(TypeId::of::<Point>())
                .is_some()
        );
    }

    #[test]
    fn recursive_types_terminate() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Node>();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(TypeId::of::<Vec<Node>>()));
        assert!(
            registry
                .get_type_trait::<TypeTraitDefault>(TypeId::of::<Node>())
                .is_none()
        );
    }
}
