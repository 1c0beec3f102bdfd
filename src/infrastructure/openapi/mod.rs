//! OpenAPI loading and extraction

pub mod extractor;
pub mod file_loader;
pub mod types;

pub use extractor::SpecExtractor;
pub use file_loader::load_document;
pub use types::*;
