//! Template system for scaffold generation.
//!
//! This module locates and loads the three templates each operation is rendered
//! through. Templates come from a user directory when one is configured and
//! from defaults embedded in the binary otherwise.

pub mod dir;
pub mod embedded;
pub mod kind;
pub mod types;

pub use dir::*;
pub use embedded::*;
pub use kind::*;
pub use types::*;
