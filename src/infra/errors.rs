// src/infra/errors.rs — Error types for MindMate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindMateError {
    /// Any failure of the remote generation call: connection error,
    /// non-success status, malformed payload, or an empty reply. They all
    /// resolve the same way (canned fallback reply), so they share one kind.
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MindMateError {
    pub fn transport(message: impl Into<String>) -> Self {
        MindMateError::Transport {
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, MindMateError::Transport { .. })
    }
}
