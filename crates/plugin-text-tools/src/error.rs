//! Error type for the text tools plugin.

use neuroserve_plugin::prelude::TaskError;
use thiserror::Error;

/// Failures raised by text tool tasks.
#[derive(Debug, Error)]
pub enum TextToolsError {
    /// The payload did not match the task's request shape.
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The response could not be serialized.
    #[error("Failed to encode result: {0}")]
    Encode(serde_json::Error),
}

impl From<TextToolsError> for TaskError {
    fn from(err: TextToolsError) -> Self {
        match err {
            TextToolsError::InvalidPayload(_) => TaskError::bad_request(err.to_string()),
            TextToolsError::Encode(_) => TaskError::failed(err.to_string()),
        }
    }
}
