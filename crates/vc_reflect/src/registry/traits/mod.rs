// -----------------------------------------------------------------------------
// Modules

mod default;
mod deserialize;
mod serialize;

// -----------------------------------------------------------------------------
// Exports

pub use default::TypeTraitDefault;
pub use deserialize::TypeTraitDeserialize;
pub use serialize::TypeTraitSerialize;
