//! Provide some utilities for implementing reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `String`
//! - `Option<T>`
//! - `Vec<T>`
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod option;
mod primitives;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
