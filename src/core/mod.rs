//! Core state machine types and logic.
//!
//! This module contains the transition engine:
//! - The name grammar shared by states and actions
//! - State identifiers and named transitions
//! - The readiness guard that gates execution
//! - The `Fsm` itself, with its registry, table and cursor
//!
//! Everything here is synchronous and touches only the owning instance.

mod error;
mod machine;
mod name;
mod readiness;
mod state;
mod transition;

pub use error::FsmError;
pub use machine::Fsm;
pub use name::{is_valid_name, MAX_NAME_LEN};
pub use readiness::{Readiness, CHECK};
pub use state::State;
pub use transition::Transition;
