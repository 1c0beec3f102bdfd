//! Infrastructure layer - concrete implementations of the generation pipeline's I/O

pub mod generation;
pub mod openapi;
pub mod output;
