//! Core value types shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable unit of data flowing through the pipeline.
///
/// A message pairs a `protocol` tag naming the payload's current
/// representation (for example `"txt_file"` or `"json"`) with the payload
/// itself. Stages never mutate a message in place; they construct a new one
/// and hand it onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    protocol: String,
    payload: String,
}

impl Message {
    pub fn new(protocol: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            payload: payload.into(),
        }
    }

    /// Tag identifying the payload's current representation.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Opaque payload content.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} bytes", self.protocol, self.payload.len())
    }
}
