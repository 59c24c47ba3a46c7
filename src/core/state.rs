//! State identifiers.

use super::error::FsmError;
use super::name::is_valid_name;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A named node in a state machine.
///
/// A `State` carries no payload beyond its identity. It can only be built
/// from a name that passes [`is_valid_name`], so every `State` held by an
/// [`Fsm`](crate::core::Fsm) is well-formed.
///
/// # Example
///
/// ```rust
/// use named_fsm::core::State;
///
/// let trial = State::new("TRIAL").unwrap();
/// assert_eq!(trial.name(), "TRIAL");
/// assert!(State::new("trial").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct State(String);

impl State {
    /// Validate `name` and wrap it as a state identifier.
    pub fn new(name: &str) -> Result<Self, FsmError> {
        if !is_valid_name(name) {
            return Err(FsmError::invalid_name(name));
        }
        Ok(Self(name.to_string()))
    }

    /// Get the state's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for State {
    type Error = FsmError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        if !is_valid_name(&name) {
            return Err(FsmError::InvalidName { name });
        }
        Ok(Self(name))
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.0
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
