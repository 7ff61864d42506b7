//! Static type information for reflected types.
//!
//! Every reflected type exposes one `&'static` [`TypeInfo`] through [`Typed`].
//! It describes the "shape" of the type: the named fields of a struct, the
//! item type of a list, the inner type of an option, or nothing at all for
//! opaque (value-like) types such as numbers and strings.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod opaque_info;
mod option_info;
mod struct_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use opaque_info::OpaqueInfo;
pub use option_info::OptionInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, Type, TypeInfo};
pub use typed::Typed;

pub(crate) use type_info::impl_type_fn;
