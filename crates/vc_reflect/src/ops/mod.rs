//! Provide interfaces for data operation.
//!
//! The following are subtraits of [`Reflect`], which provide data access
//! methods for the different kinds of types.
//!
//! - [`Struct`]: For struct with named fields (e.g. `A{ .. }`).
//! - [`List`]: For list-like (e.g. `Vec<i32>`).
//! - [`Optional`]: For `Option<T>`.
//!
//! Opaque types expose no subtrait, they can only be replaced as a whole
//! through [`Reflect::set`].
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::set`]: crate::Reflect::set

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod option_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use option_ops::Optional;
pub use struct_ops::{Struct, StructFieldIter};
