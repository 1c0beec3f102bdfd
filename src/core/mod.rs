//! openapi2runn core library
//!
//! Errors, configuration, path utilities and templates shared by the
//! loading and generation layers.

pub mod config;
pub mod error;
pub mod templates;
pub mod utils;

pub use error::{Error, Result};
