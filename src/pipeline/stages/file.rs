//! File-backed source and sink stages.

use anyhow::{Context as AnyhowContext, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::pipeline::types::{Stage, StageKind};
use crate::types::Message;

/// Source stage reading a whole file into a single message.
///
/// The file handle is opened and released within one `process` call; nothing
/// is held across stage boundaries.
pub struct FileSource {
    path: PathBuf,
    protocol: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>, protocol: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            protocol: protocol.into(),
        }
    }
}

impl Stage for FileSource {
    fn name(&self) -> &str {
        "FileSource"
    }

    fn kind(&self) -> StageKind {
        StageKind::Source
    }

    fn process(&self, _input: Option<Message>) -> Result<Option<Message>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(Some(Message::new(self.protocol.clone(), content)))
    }
}

/// Sink stage writing the payload verbatim to a file.
///
/// Returns the input message unchanged as the run's final result.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Stage for FileSink {
    fn name(&self) -> &str {
        "FileSink"
    }

    fn kind(&self) -> StageKind {
        StageKind::Sink
    }

    fn process(&self, input: Option<Message>) -> Result<Option<Message>> {
        let msg = input.context("Sink requires an input message")?;
        fs::write(&self.path, msg.payload())
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!("File written successfully to {}", self.path.display());
        Ok(Some(msg))
    }
}
