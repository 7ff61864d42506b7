//! A JSON host that drives reflection through registered converters.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod serializer;
mod settings;

// -----------------------------------------------------------------------------
// Exports

pub use error::JsonError;
pub use serializer::JsonSerializer;
pub use settings::JsonSettings;
