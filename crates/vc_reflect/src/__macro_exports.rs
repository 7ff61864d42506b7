//! Items referenced by the code the exported macros expand to.

pub use alloc::boxed::Box;
