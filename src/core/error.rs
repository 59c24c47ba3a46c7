//! Engine error types.

use thiserror::Error;

/// Errors returned by state machine mutators and execution.
///
/// The set of kinds is closed. Match on the variant, not on the message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Invalid name '{name}'")]
    InvalidName { name: String },

    #[error("State '{name}' already exists")]
    StateAlreadyExists { name: String },

    #[error("State '{name}' not found")]
    StateNotFound { name: String },

    #[error("Transition {action} ({from}) -> ({to}) already exists")]
    TransitionAlreadyExists {
        from: String,
        to: String,
        action: String,
    },

    /// Reserved; the engine itself never returns this kind.
    #[error("Transition not allowed")]
    TransitionNotAllowed,

    #[error("State machine is not ready: add at least one state and one transition")]
    NotReady,

    #[error("No transition {action} ({from}) -> ({to})")]
    ExecutionNotAllowed {
        from: String,
        to: String,
        action: String,
    },
}

impl FsmError {
    pub(crate) fn invalid_name(name: &str) -> Self {
        Self::InvalidName {
            name: name.to_string(),
        }
    }

    pub(crate) fn state_not_found(name: &str) -> Self {
        Self::StateNotFound {
            name: name.to_string(),
        }
    }
}
