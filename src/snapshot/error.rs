//! Snapshot error types.

use crate::core::FsmError;
use thiserror::Error;

/// Errors that can occur while saving or restoring a state machine
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Payload decoded but describes an invalid machine
    #[error("Snapshot rejected: {0}")]
    Invalid(#[from] FsmError),
}

impl SnapshotError {
    /// The engine error behind an [`SnapshotError::Invalid`] payload.
    pub fn fsm_error(&self) -> Option<&FsmError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
