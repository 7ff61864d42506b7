#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod classifier;
pub mod converter;
pub mod json;
pub mod provider;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use classifier::{Constructibility, ConstructibilityClassifier};
pub use converter::{JsonConverter, TypedInjectingConverter, UniversalInjectingConverter};
pub use error::InjectError;
pub use json::{JsonError, JsonSerializer, JsonSettings};
pub use provider::{Injectable, Provider, ServiceCollection, ServiceProvider, TypeTraitInject};
