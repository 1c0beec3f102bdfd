//! Application layer - wires the loader, extractor, templates and generator together

pub mod commands;
pub mod generate;

pub use commands::*;
pub use generate::*;
