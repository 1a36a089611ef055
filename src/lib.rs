//! Staged data-processing pipeline engine.
//!
//! A [`Pipe`] holds an ordered chain of [`Stage`]s and runs them end-to-end in
//! a single synchronous pass: a source originates a [`Message`], filters and
//! transformers rewrite it, and a sink performs the terminal effect. A filter
//! may also *drop* the message, ending the run early without error; drops are
//! reported as [`RunOutcome::Dropped`], distinct from stage failures.
//!
//! The engine performs no synchronization of its own. [`Pipe::execute`] takes
//! a shared reference, so a pipe may be driven from several threads at once,
//! but only if every stage instance is free of shared mutable state; that is
//! the stage author's responsibility.

pub mod pipeline;
pub mod types;

// Re-export key types for convenience
pub use pipeline::{
    DropAll, FileSink, FileSource, JsonWrap, Pipe, PipeError, RedactFilter, RunOutcome, Stage,
    StageKind,
};
pub use types::Message;
