//! Named FSM: a finite state machine engine over named states
//!
//! Callers register named states and named directed transitions, point the
//! cursor at a state, and request transitions that fire only when a matching
//! `(current, destination, action)` triple was registered. A callback is
//! notified after each successful move.
//!
//! # Core Concepts
//!
//! - **State**: a unique, upper-case name such as `TRIAL` or `NOT_READY`
//! - **Transition**: a named edge `(from, to, action)`, unique per triple
//! - **Readiness**: execution is refused until the machine has a transition
//! - **Snapshot**: a JSON or binary round-trip that revalidates everything
//!
//! # Example
//!
//! ```rust
//! use named_fsm::core::{Fsm, FsmError};
//!
//! let mut plan = Fsm::new("Customer Plan");
//! for state in ["TRIAL", "BASIC", "PREMIUM"] {
//!     plan.add_state(state)?;
//! }
//! plan.add_trans("TRIAL", "BASIC", "UPGRADE")?;
//! plan.add_trans("TRIAL", "PREMIUM", "UPGRADE")?;
//! plan.add_trans("PREMIUM", "BASIC", "DOWNGRADE")?;
//! plan.init("TRIAL")?;
//!
//! plan.exec("UPGRADE", "PREMIUM")?;
//! assert_eq!(plan.get_state(), "PREMIUM");
//!
//! let json = plan.to_json().unwrap();
//! let restored = named_fsm::core::Fsm::from_json(&json).unwrap();
//! assert_eq!(restored.get_state(), "PREMIUM");
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{build_from_triples, FsmBuilder};
pub use core::{is_valid_name, Fsm, FsmError, Readiness, State, Transition};
pub use snapshot::{Snapshot, SnapshotError, TransitionRecord};
