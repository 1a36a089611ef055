//! Pipeline execution engine.

use tracing::{debug, info, warn};

use super::types::{PipeError, RunOutcome, Stage, StageKind};
use crate::types::Message;

/// Ordered chain of stages and the engine that runs them sequentially.
///
/// Stages execute strictly in insertion order within one call to
/// [`execute`](Pipe::execute); the engine holds no per-run state, so every
/// call re-runs the full chain from scratch.
pub struct Pipe {
    pub(crate) stages: Vec<Box<dyn Stage>>,
}

impl Pipe {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the pipeline
    pub fn add_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run the complete pipeline.
    ///
    /// Fails fast on an empty pipe or a non-source first stage. Each stage's
    /// output becomes the next stage's input; a stage failure aborts the run
    /// immediately, and a filter drop ends it cleanly as
    /// [`RunOutcome::Dropped`].
    pub fn execute(&self) -> Result<RunOutcome, PipeError> {
        let first = self.stages.first().ok_or(PipeError::Empty)?;
        if first.kind().reads_input() {
            return Err(PipeError::NeedsInput {
                index: 0,
                name: first.name().to_string(),
            });
        }
        if let Some(last) = self.stages.last() {
            if last.kind() != StageKind::Sink {
                warn!(
                    "Final stage '{}' is a {}, not a sink",
                    last.name(),
                    last.kind()
                );
            }
        }

        info!("Starting pipeline with {} stages", self.stages.len());

        let mut current: Option<Message> = None;

        for (idx, stage) in self.stages.iter().enumerate() {
            info!(
                "Running stage {}/{}: {}",
                idx + 1,
                self.stages.len(),
                stage.name()
            );

            // Sources ignore their input by contract.
            let input = if stage.kind().reads_input() {
                match current.take() {
                    Some(msg) => Some(msg),
                    None => {
                        return Err(PipeError::NeedsInput {
                            index: idx,
                            name: stage.name().to_string(),
                        })
                    }
                }
            } else {
                None
            };

            let output = stage.process(input).map_err(|source| PipeError::Stage {
                index: idx,
                name: stage.name().to_string(),
                kind: stage.kind(),
                source,
            })?;

            match output {
                Some(msg) => {
                    debug!("Stage '{}' produced {}", stage.name(), msg);
                    current = Some(msg);
                }
                None if stage.kind().may_drop() => {
                    info!("Stage '{}' dropped the message, ending run", stage.name());
                    return Ok(RunOutcome::Dropped {
                        index: idx,
                        name: stage.name().to_string(),
                    });
                }
                None => {
                    return Err(PipeError::Stage {
                        index: idx,
                        name: stage.name().to_string(),
                        kind: stage.kind(),
                        source: anyhow::anyhow!(
                            "{} stage produced no message; only filters may drop",
                            stage.kind()
                        ),
                    });
                }
            }
        }

        info!("Pipeline completed successfully");

        // The chain is non-empty and every iteration either returned early or
        // left a message, so `current` is populated here.
        current
            .map(RunOutcome::Completed)
            .ok_or(PipeError::Empty)
    }
}

impl Default for Pipe {
    fn default() -> Self {
        Self::new()
    }
}
