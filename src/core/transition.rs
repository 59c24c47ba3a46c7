//! Named directed edges between states.

use super::state::State;
use std::fmt;

/// A transition `(from, to, action)`.
///
/// Endpoints are held by name, never by reference into the registry, so a
/// transition survives cloning and serialization unchanged. Uniqueness is
/// per full triple: the same action may label several edges.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Transition {
    pub from: State,
    pub to: State,
    pub action: String,
}

impl Transition {
    /// Check whether this edge is exactly `(from, to, action)`.
    pub fn matches(&self, from: &str, to: &str, action: &str) -> bool {
        self.from == from && self.to == to && self.action == action
    }
}

/// Formats as `<action> (<from>) -> (<to>)`.
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) -> ({})", self.action, self.from, self.to)
    }
}
