//! Generation domain module - turns the extracted model into a scaffold tree
//!
//! The [`GenerationOrchestrator`] walks every path/method pair, renders the
//! base request, the no-auth scenario and, unless the operation's override
//! policy forbids it, the synthesized test data.

pub mod orchestrator;
pub mod synthesizer;
pub mod types;

pub use orchestrator::*;
pub use synthesizer::synthesize;
pub use types::*;
