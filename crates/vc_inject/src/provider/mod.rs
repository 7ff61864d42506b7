//! Dependency providers and the injection recipe of a type.
//!
//! - [`Provider`]: builds an instance of a type described by a [`TypeMeta`].
//! - [`Injectable`]: a type built from the services of a [`ServiceProvider`].
//! - [`TypeTraitInject`]: the type trait storing an [`Injectable`] recipe.
//! - [`ServiceCollection`] / [`ServiceProvider`]: a singleton service registry,
//!   the standard [`Provider`].
//!
//! [`TypeMeta`]: vc_reflect::registry::TypeMeta

// -----------------------------------------------------------------------------
// Modules

mod inject;
mod services;

// -----------------------------------------------------------------------------
// Exports

pub use inject::{Injectable, TypeTraitInject};
pub use services::{ServiceCollection, ServiceProvider};

use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::registry::TypeMeta;

use crate::InjectError;

// -----------------------------------------------------------------------------
// Provider

/// Builds instances of types whose construction needs collaborators.
///
/// Implementations resolve the type's dependencies themselves; callers
/// only see the finished instance.
pub trait Provider: Send + Sync {
    /// Builds a new instance of the type `type_meta` describes.
    ///
    /// The returned value is always of that concrete type.
    fn construct(&self, type_meta: &TypeMeta) -> Result<Box<dyn Reflect>, InjectError>;
}
