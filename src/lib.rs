//! openapi2runn - generate runn test-scenario scaffolds from OpenAPI documents
//!
//! For every path/method pair in an OpenAPI 3.x document this crate writes a
//! base request definition, a no-auth scenario and a `data.json` of dummy test
//! data under `0_base/` and `1_noAuth/`.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;

pub use crate::core::error::{Error, Result};
