//! Runtime lookup of type capabilities by `TypeId`.
//!
//! A [`TypeRegistry`] maps each registered type to a [`TypeMeta`]: its
//! [`TypeInfo`] plus a table of [`TypeTrait`]s. A type trait is a `Clone`
//! struct of function pointers built for a concrete type through
//! [`FromType`], so code that only holds a `TypeId` can still use it.
//!
//! This crate provides three:
//!
//! - [`TypeTraitDefault`] builds a value with `Default`.
//! - [`TypeTraitSerialize`] and [`TypeTraitDeserialize`] route a type through
//!   its own serde impls instead of the reflection drivers.
//!
//! Other crates add their own the same way.
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::TypeTraitDefault;
pub use traits::{TypeTraitDeserialize, TypeTraitSerialize};
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;
