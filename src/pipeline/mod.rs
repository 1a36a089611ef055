//! Sequential stage pipeline with drop-aware early termination.
//!
//! The pipeline chains four kinds of stage behind one invocation interface:
//! 1. Source - originates a message, ignoring any input
//! 2. Filter - passes a possibly-modified message onward, or drops it
//! 3. Transformer - re-encodes the message under a new protocol tag
//! 4. Sink - performs the terminal effect and yields the final result
//!
//! Stages run strictly in insertion order within one call to
//! [`Pipe::execute`]; a drop or a failure stops the chain immediately.

mod execution;
mod stages;
mod types;

// Re-export all public types from types module
pub use types::{PipeError, RunOutcome, Stage, StageKind};

// Re-export the execution engine
pub use execution::Pipe;

// Re-export all stage implementations
pub use stages::{DropAll, FileSink, FileSource, JsonWrap, RedactFilter};
