//! Readiness guard that gates execution.
//!
//! Every [`Fsm`](crate::core::Fsm) owns one guard. It is a fixed two-state
//! machine with states `READY` and `NOT_READY` and a single symmetric action
//! `CHECK`. The guard starts at `NOT_READY` and flips to `READY` once its
//! owner has at least one state and one transition. States and transitions
//! are never removed, so in practice the flip is one-way.

use std::fmt;

/// The guard's only action.
pub const CHECK: &str = "CHECK";

/// Current position of a readiness guard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Readiness {
    Ready,
    #[default]
    NotReady,
}

impl Readiness {
    /// Get the guard state's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::NotReady => "NOT_READY",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Apply `CHECK` given whether the owner is configured.
    ///
    /// Moves `NOT_READY -> READY` when `configured` holds and
    /// `READY -> NOT_READY` when it does not. Otherwise the guard stays put.
    pub fn check(self, configured: bool) -> Self {
        let next = if configured {
            Self::Ready
        } else {
            Self::NotReady
        };
        if next != self {
            tracing::trace!(
                action = CHECK,
                from = self.name(),
                to = next.name(),
                "readiness guard changed"
            );
        }
        next
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
