//! Provide serialization and deserialization support for the reflection system.
//!
//! This module primarily serves two purposes:
//!
//! 1. Enables serialization and deserialization under type-erased conditions
//! 2. Allows composite types to be serialized and deserialized based on the reflection system's
//!    type information, even without implementing `serde` traits
//!
//! # Overview
//!
//! ## Serialization
//!
//! - [`TypeTraitSerialize`]: Stores function pointers that enable dynamic types to invoke
//!   `serde`'s serialization implementations.
//! - [`SerializeProcessor`]: Serialization processor that allows users to customize
//!   serialization behavior.
//! - [`SerializeDriver`]: Standard serializer that follows a priority-based dispatch strategy.
//!     - First attempts to use [`SerializeProcessor`]; if supported, returns its result immediately.
//!     - Then queries and invokes [`TypeTraitSerialize`] if available.
//!     - Finally falls back to reflection-based serialization (unavailable for Opaque types).
//!
//! ## Deserialization
//!
//! - [`TypeTraitDeserialize`]: Stores function pointers that enable dynamic types to invoke
//!   `serde`'s deserialization implementations.
//! - [`DeserializeProcessor`]: Deserialization processor that allows users to customize
//!   deserialization behavior.
//! - [`DeserializeDriver`]: Standard deserializer that follows a priority-based dispatch strategy.
//!     - First attempts to use [`DeserializeProcessor`]; if supported, returns its result immediately.
//!     - Then queries and invokes [`TypeTraitDeserialize`] if available.
//!     - Finally falls back to reflection-based deserialization (unavailable for Opaque types).
//!     - Corresponds to [`SerializeDriver`]; requires explicit [`TypeMeta`] since data lacks type information.
//! - [`PopulateDriver`]: Fills the members of an existing struct instance from a data object.
//!   Processors that construct an instance themselves use it to finish the read.
//!
//! ## Member matching
//!
//! Struct members are matched by name, exact match first, then ignoring ASCII case.
//! Unknown members and members listed as skipped are read and discarded.
//! Skipped members are never written.
//!
//! [`TypeMeta`]: crate::registry::TypeMeta
//! [`TypeTraitDeserialize`]: crate::registry::TypeTraitDeserialize
//! [`TypeTraitSerialize`]: crate::registry::TypeTraitSerialize

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use de::{DeserializeDriver, DeserializeProcessor, PopulateDriver};
pub use ser::{SerializeDriver, SerializeProcessor};
