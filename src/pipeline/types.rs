//! Pipeline types and trait definitions.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Message;

/// Role of a stage within the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind {
    /// Originates data; input is ignored.
    Source,
    /// Conditional pass-through; the only kind allowed to drop.
    Filter,
    /// Re-encodes the message under a new protocol tag.
    Transformer,
    /// Terminal effect; expected to sit last in the chain.
    Sink,
}

impl StageKind {
    /// Whether the engine hands this stage the current message.
    pub(crate) fn reads_input(self) -> bool {
        !matches!(self, StageKind::Source)
    }

    /// Whether producing no message is a clean drop rather than a
    /// contract violation.
    pub(crate) fn may_drop(self) -> bool {
        matches!(self, StageKind::Filter)
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Source => "source",
            StageKind::Filter => "filter",
            StageKind::Transformer => "transformer",
            StageKind::Sink => "sink",
        };
        f.write_str(name)
    }
}

/// Trait for pipeline stages.
///
/// Stages are stateless with respect to control flow: they see neither their
/// position in the chain nor the [`Pipe`](super::Pipe) driving them. Any
/// internal state (a counter, a compiled pattern) is private to the instance,
/// and helpers such as encoders are constructor dependencies rather than
/// process-wide globals.
pub trait Stage: Send + Sync {
    /// Name of this stage, used in logs and error reports.
    fn name(&self) -> &str;

    /// Role this stage plays in the chain.
    fn kind(&self) -> StageKind;

    /// Process the current message.
    ///
    /// `Ok(Some(_))` hands a new message to the next stage. `Ok(None)` is a
    /// deliberate drop, meaningful only for filters; the engine rejects it
    /// from every other kind. `Err(_)` aborts the run with this stage named
    /// as the cause. Sources receive `None` as input, every other kind
    /// receives `Some(_)`.
    fn process(&self, input: Option<Message>) -> Result<Option<Message>>;
}

/// Outcome of a pipeline run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Every stage produced a message; holds the final stage's output.
    Completed(Message),
    /// A filter deliberately dropped the message; the run ended early
    /// without error and without invoking later stages.
    Dropped {
        /// Zero-based position of the filter that dropped.
        index: usize,
        /// Name of the filter that dropped.
        name: String,
    },
}

impl RunOutcome {
    /// Final message, if the run completed with one.
    pub fn message(&self) -> Option<&Message> {
        match self {
            RunOutcome::Completed(msg) => Some(msg),
            RunOutcome::Dropped { .. } => None,
        }
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, RunOutcome::Dropped { .. })
    }
}

/// Errors surfaced by [`Pipe::execute`](super::Pipe::execute).
#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    /// The pipe was executed with no stages attached.
    #[error("pipeline has no stages")]
    Empty,

    /// A stage that reads its input was reached with no message available,
    /// e.g. a filter placed first in the chain.
    #[error("stage {index} '{name}' requires an input message but none is available")]
    NeedsInput { index: usize, name: String },

    /// A stage failed; carries the stage's identity and the underlying cause.
    #[error("stage {index} '{name}' ({kind}) failed")]
    Stage {
        index: usize,
        name: String,
        kind: StageKind,
        #[source]
        source: anyhow::Error,
    },
}

impl PipeError {
    /// Zero-based position of the offending stage, where one is known.
    pub fn stage_index(&self) -> Option<usize> {
        match self {
            PipeError::Empty => None,
            PipeError::NeedsInput { index, .. } | PipeError::Stage { index, .. } => Some(*index),
        }
    }
}
