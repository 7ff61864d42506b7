//! Decides which types must be constructed through a provider.

use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use vc_reflect::info::ReflectKind;
use vc_reflect::registry::{TypeMeta, TypeTraitDefault};
use vc_utils::TypeIdMap;

// -----------------------------------------------------------------------------
// Constructibility

/// How a type gets its first instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constructibility {
    /// The type builds itself through [`TypeTraitDefault`].
    DefaultConstructible,
    /// The type has no default construction and needs a provider.
    RequiresProvider,
}

// -----------------------------------------------------------------------------
// ConstructibilityClassifier

/// Memoized verdicts on whether a type needs provider construction.
///
/// A type is classified once, by trying its own default construction:
///
/// - value-like types ([`ReflectKind::Opaque`]) are never accepted,
///   and are not cached;
/// - if [`TypeTraitDefault`] produces an instance, the instance is dropped and
///   the type is [`DefaultConstructible`] for good, even if it could also be
///   injected;
/// - if the type has no [`TypeTraitDefault`], it [`RequiresProvider`].
///
/// A panic inside the default constructor propagates to the caller and
/// leaves the type unclassified.
///
/// Verdicts never change once recorded. Concurrent callers may probe the same
/// type twice, but only one verdict is stored.
///
/// # Example
///
/// ```
/// use vc_inject::{Constructibility, ConstructibilityClassifier};
/// use vc_reflect::registry::{GetTypeMeta, TypeTraitDefault};
///
/// #[derive(Default)]
/// struct Plain { n: u8 }
/// struct Wired { n: u8 }
///
/// vc_reflect::impl_reflect_struct!(Plain { n: u8 } traits [TypeTraitDefault]);
/// vc_reflect::impl_reflect_struct!(Wired { n: u8 });
///
/// let classifier = ConstructibilityClassifier::new();
/// assert!(!classifier.accepts(&Plain::get_type_meta()));
/// assert!(classifier.accepts(&Wired::get_type_meta()));
/// assert!(!classifier.accepts(&u8::get_type_meta()));
///
/// assert_eq!(
///     classifier.verdict(core::any::TypeId::of::<Wired>()),
///     Some(Constructibility::RequiresProvider),
/// );
/// ```
///
/// [`DefaultConstructible`]: Constructibility::DefaultConstructible
/// [`RequiresProvider`]: Constructibility::RequiresProvider
pub struct ConstructibilityClassifier {
    verdicts: RwLock<TypeIdMap<Constructibility>>,
}

impl Default for ConstructibilityClassifier {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructibilityClassifier {
    /// Creates a classifier with `String` excluded.
    pub fn new() -> Self {
        let mut verdicts = TypeIdMap::new();
        verdicts.insert_type::<String>(Constructibility::DefaultConstructible);
        Self {
            verdicts: RwLock::new(verdicts),
        }
    }

    /// Excludes `T` from provider construction, without probing it.
    pub fn with_excluded<T: Any>(self) -> Self {
        self.verdicts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert_type::<T>(Constructibility::DefaultConstructible);
        self
    }

    /// Returns `true` if the type must be constructed through a provider.
    pub fn accepts(&self, type_meta: &TypeMeta) -> bool {
        if type_meta.kind() == ReflectKind::Opaque {
            return false;
        }

        let type_id = type_meta.type_id();
        if let Some(verdict) = self.verdict(type_id) {
            return verdict == Constructibility::RequiresProvider;
        }

        let verdict = probe(type_meta);
        let inserted = self
            .verdicts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .try_insert(type_id, || verdict);
        if inserted {
            log::debug!("`{}` classified as {verdict:?}", type_meta.type_path());
        }

        verdict == Constructibility::RequiresProvider
    }

    /// Returns the recorded verdict of a type, if it was classified.
    pub fn verdict(&self, type_id: TypeId) -> Option<Constructibility> {
        self.verdicts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    /// Returns the number of recorded verdicts, exclusions included.
    pub fn len(&self) -> usize {
        self.verdicts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn probe(type_meta: &TypeMeta) -> Constructibility {
    log::trace!("probing default construction of `{}`", type_meta.type_path());
    match type_meta.get_trait::<TypeTraitDefault>() {
        Some(generator) => {
            drop(generator.default());
            Constructibility::DefaultConstructible
        }
        None => Constructibility::RequiresProvider,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use vc_reflect::registry::{GetTypeMeta, TypeTraitDefault};

    use super::{Constructibility, ConstructibilityClassifier};
    use crate::fixtures::{Foo, SubClass, TestClass};

    static PROBED: AtomicUsize = AtomicUsize::new(0);

    struct Counted {
        value: i32,
    }

    impl Default for Counted {
        fn default() -> Self {
            PROBED.fetch_add(1, Ordering::SeqCst);
            Self { value: 0 }
        }
    }

    vc_reflect::impl_reflect_struct!(Counted { value: i32 } traits [TypeTraitDefault]);

    #[test]
    fn probe_runs_once() {
        let classifier = ConstructibilityClassifier::new();
        let meta = Counted::get_type_meta();

        assert!(!classifier.accepts(&meta));
        assert!(!classifier.accepts(&meta));
        assert!(!classifier.accepts(&meta));

        assert_eq!(PROBED.load(Ordering::SeqCst), 1);
        assert_eq!(
            classifier.verdict(TypeId::of::<Counted>()),
            Some(Constructibility::DefaultConstructible)
        );
    }

    #[test]
    fn value_types_are_never_accepted() {
        let classifier = ConstructibilityClassifier::new();
        assert!(!classifier.accepts(&String::get_type_meta()));
        assert!(!classifier.accepts(&i32::get_type_meta()));
        assert!(!classifier.accepts(&bool::get_type_meta()));

        // Only the seeded exclusion is recorded.
        assert_eq!(classifier.len(), 1);
    }

    #[test]
    fn default_types_are_rejected() {
        let classifier = ConstructibilityClassifier::new();
        assert!(!classifier.accepts(&Foo::get_type_meta()));
        assert!(!classifier.accepts(&Option::<SubClass>::get_type_meta()));
        assert!(!classifier.accepts(&Vec::<Foo>::get_type_meta()));
    }

    #[test]
    fn types_without_default_are_accepted() {
        let classifier = ConstructibilityClassifier::new();
        assert!(classifier.accepts(&TestClass::get_type_meta()));
        assert!(classifier.accepts(&SubClass::get_type_meta()));
        assert_eq!(
            classifier.verdict(TypeId::of::<SubClass>()),
            Some(Constructibility::RequiresProvider)
        );
    }

    #[test]
    fn excluded_types_skip_the_probe() {
        let classifier = ConstructibilityClassifier::new().with_excluded::<SubClass>();
        assert!(!classifier.accepts(&SubClass::get_type_meta()));
        assert_eq!(classifier.len(), 2);
    }

    #[test]
    fn concurrent_callers_converge() {
        let classifier = ConstructibilityClassifier::new();
        let meta = TestClass::get_type_meta();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(classifier.accepts(&meta));
                    }
                });
            }
        });

        assert_eq!(classifier.len(), 2);
        assert_eq!(
            classifier.verdict(TypeId::of::<TestClass>()),
            Some(Constructibility::RequiresProvider)
        );
    }
}
