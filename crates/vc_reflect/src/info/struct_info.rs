use alloc::boxed::Box;
use core::any::Any;

use vc_utils::hash::HashMap;

use crate::info::{NamedField, Type, impl_type_fn};

/// A container for compile-time named struct info.
///
/// Besides the reflected fields, a struct may declare *skipped* member names.
/// Skipped members exist on the Rust type but never travel through a data
/// format: they are ignored when reading and omitted when writing. Injected
/// collaborators are the usual example.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::info::Typed;
///
/// #[derive(Default)]
/// struct A {
///     val: f32,
/// }
///
/// vc_reflect::impl_reflect_struct!(A { val: f32 });
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// assert_eq!(info.resolve_field("VAL").unwrap().name(), "val");
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    ident: &'static str,
    fields: HashMap<&'static str, NamedField>,
    field_names: Box<[&'static str]>,
    skipped: Box<[&'static str]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// `ident` is the bare struct name used by self-describing formats.
    /// The order of fields depends on the input order.
    pub fn new<T: Any>(ident: &'static str, fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let fields = fields.iter().map(|v| (v.name(), v.clone())).collect();

        Self {
            ty: Type::of::<T>(),
            ident,
            fields,
            field_names,
            skipped: Box::new([]),
        }
    }

    /// Declares members that are never read from or written to a data format.
    pub fn with_skipped(self, skipped: &[&'static str]) -> Self {
        Self {
            skipped: skipped.into(),
            ..self
        }
    }

    /// Returns the bare struct name, without module path.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(self.field_names.get(index)?)
    }

    /// Finds the field an incoming member name refers to.
    ///
    /// An exact match wins; otherwise the first field, in declaration order,
    /// that matches ignoring ASCII case is returned.
    pub fn resolve_field(&self, name: &str) -> Option<&NamedField> {
        if let Some(field) = self.fields.get(name) {
            return Some(field);
        }
        self.field_names
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(name))
            .and_then(|candidate| self.fields.get(candidate))
    }

    /// Returns `true` if `name` refers to a skipped member, ignoring ASCII case.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skipped.iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    /// Returns the skipped member names.
    #[inline]
    pub fn skipped(&self) -> &[&'static str] {
        &self.skipped
    }

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl Iterator<Item = &NamedField> {
        self.field_names
            .iter()
            .filter_map(|name| self.fields.get(name))
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|s| *s == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }
}
