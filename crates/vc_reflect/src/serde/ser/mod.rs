// -----------------------------------------------------------------------------
// Modules

mod driver;
mod processor;

mod list_serializer;
mod struct_serializer;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;
pub use processor::SerializeProcessor;
