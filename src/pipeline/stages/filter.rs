//! Content-rule filter stages.

use anyhow::{Context as AnyhowContext, Result};

use crate::pipeline::types::{Stage, StageKind};
use crate::types::Message;

/// Filter removing every occurrence of a fixed substring from the payload.
///
/// The protocol tag is preserved. With `drop_if_empty` set, a payload that
/// is empty after redaction drops the message instead of passing it on.
pub struct RedactFilter {
    pattern: String,
    drop_if_empty: bool,
}

impl RedactFilter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            drop_if_empty: false,
        }
    }

    pub fn drop_if_empty(mut self) -> Self {
        self.drop_if_empty = true;
        self
    }
}

impl Stage for RedactFilter {
    fn name(&self) -> &str {
        "RedactFilter"
    }

    fn kind(&self) -> StageKind {
        StageKind::Filter
    }

    fn process(&self, input: Option<Message>) -> Result<Option<Message>> {
        let msg = input.context("Filter requires an input message")?;
        let redacted = msg.payload().replace(&self.pattern, "");
        if self.drop_if_empty && redacted.is_empty() {
            return Ok(None);
        }
        Ok(Some(Message::new(msg.protocol(), redacted)))
    }
}

/// Filter that unconditionally drops every message.
pub struct DropAll;

impl Stage for DropAll {
    fn name(&self) -> &str {
        "DropAll"
    }

    fn kind(&self) -> StageKind {
        StageKind::Filter
    }

    fn process(&self, input: Option<Message>) -> Result<Option<Message>> {
        input.context("Filter requires an input message")?;
        Ok(None)
    }
}
