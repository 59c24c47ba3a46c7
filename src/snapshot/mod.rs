//! Save and restore state machines.
//!
//! A [`Snapshot`] holds a machine's name, current state, states and
//! transitions, with transition endpoints stored as state names. The
//! readiness guard is never stored; restoring a snapshot rebuilds it from
//! the restored transitions.
//!
//! Restoring replays the snapshot through the public mutators, so every
//! invariant is checked again:
//!
//! - malformed state or action names fail with `InvalidName`
//! - repeated states fail with `StateAlreadyExists`
//! - dangling endpoints fail with `StateNotFound`
//! - repeated triples fail with `TransitionAlreadyExists`
//! - an unknown current state fails with `StateNotFound`
//!
//! An empty `Current` restores a machine whose cursor is unset.

use crate::core::{Fsm, FsmError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod error;

pub use error::SnapshotError;

/// Interchange form of one transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransitionRecord {
    pub from: String,
    pub to: String,
    pub action: String,
}

/// Interchange form of a whole machine.
///
/// Field names are serialized in PascalCase (`Name`, `Current`, `States`,
/// `Transitions`) and stay fixed for compatibility.
///
/// # Example
///
/// ```rust
/// use named_fsm::core::Fsm;
/// use named_fsm::snapshot::Snapshot;
///
/// let json = r#"{
///     "Name": "Customer Plan Status",
///     "Current": "TRIAL",
///     "States": ["TRIAL", "BASIC"],
///     "Transitions": [{"From": "TRIAL", "To": "BASIC", "Action": "UPGRADE"}]
/// }"#;
///
/// let snapshot: Snapshot = serde_json::from_str(json).unwrap();
/// let mut fsm = Fsm::import(&snapshot).unwrap();
/// fsm.exec("UPGRADE", "BASIC").unwrap();
/// assert_eq!(fsm.get_state(), "BASIC");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub name: String,
    pub current: String,
    pub states: Vec<String>,
    pub transitions: Vec<TransitionRecord>,
}

impl Fsm {
    /// Capture this machine as a [`Snapshot`].
    ///
    /// States and transitions keep their insertion order, so exporting the
    /// same machine twice yields identical snapshots.
    pub fn export(&self) -> Snapshot {
        Snapshot {
            name: self.name().to_string(),
            current: self.get_state().to_string(),
            states: self.states().iter().map(|s| s.name().to_string()).collect(),
            transitions: self
                .transitions()
                .iter()
                .map(|t| TransitionRecord {
                    from: t.from.name().to_string(),
                    to: t.to.name().to_string(),
                    action: t.action.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a machine from a [`Snapshot`], revalidating every entry.
    ///
    /// Stops at the first violation.
    pub fn import(snapshot: &Snapshot) -> Result<Self, FsmError> {
        let mut fsm = Fsm::new(snapshot.name.clone());

        for state in &snapshot.states {
            fsm.add_state(state)?;
        }
        for t in &snapshot.transitions {
            fsm.add_trans(&t.from, &t.to, &t.action)?;
        }
        if !snapshot.current.is_empty() {
            fsm.init(&snapshot.current)?;
        }

        Ok(fsm)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(&self.export())
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(&self.export())
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Restore from JSON produced by [`Fsm::to_json`] or by hand.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        Ok(Fsm::import(&snapshot)?)
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(&self.export())
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Restore from bytes produced by [`Fsm::to_binary`].
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        Ok(Fsm::import(&snapshot)?)
    }
}

impl TryFrom<Snapshot> for Fsm {
    type Error = FsmError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        Fsm::import(&snapshot)
    }
}

impl From<&Fsm> for Snapshot {
    fn from(fsm: &Fsm) -> Self {
        fsm.export()
    }
}

impl Serialize for Fsm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.export().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fsm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::deserialize(deserializer)?;
        Fsm::import(&snapshot).map_err(serde::de::Error::custom)
    }
}

impl Snapshot {
    /// Check whether two snapshots describe the same machine.
    ///
    /// Compares name and current state exactly, and states and transitions
    /// as sets, ignoring order.
    pub fn equivalent(&self, other: &Snapshot) -> bool {
        use std::collections::HashSet;

        let states = |s: &Snapshot| s.states.iter().cloned().collect::<HashSet<_>>();
        let transitions = |s: &Snapshot| s.transitions.iter().cloned().collect::<HashSet<_>>();

        self.name == other.name
            && self.current == other.current
            && states(self) == states(other)
            && transitions(self) == transitions(other)
    }
}
