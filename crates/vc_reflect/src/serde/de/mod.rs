// -----------------------------------------------------------------------------
// Modules

mod driver;
mod populate;
mod processor;

mod list_visitor;
mod option_visitor;

// -----------------------------------------------------------------------------
// Exports

pub use driver::DeserializeDriver;
pub use populate::PopulateDriver;
pub use processor::DeserializeProcessor;
