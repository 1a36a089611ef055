//! Structured-encoding transformer stages.

use anyhow::{Context as AnyhowContext, Result};

use crate::pipeline::types::{Stage, StageKind};
use crate::types::Message;

/// Transformer wrapping the payload in a single-field JSON object.
///
/// `{"<field>": "<payload>"}`, re-tagged with protocol `"json"`.
pub struct JsonWrap {
    field: String,
}

impl JsonWrap {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Stage for JsonWrap {
    fn name(&self) -> &str {
        "JsonWrap"
    }

    fn kind(&self) -> StageKind {
        StageKind::Transformer
    }

    fn process(&self, input: Option<Message>) -> Result<Option<Message>> {
        let msg = input.context("Transformer requires an input message")?;
        let mut object = serde_json::Map::new();
        object.insert(
            self.field.clone(),
            serde_json::Value::String(msg.payload().to_string()),
        );
        let json = serde_json::to_string(&serde_json::Value::Object(object))
            .context("Failed to encode payload as JSON")?;
        Ok(Some(Message::new("json", json)))
    }
}
