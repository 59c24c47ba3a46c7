//! Builder API for ergonomic state machine construction.
//!
//! This module provides a bulk constructor, a fluent builder and the
//! [`fsm!`](crate::fsm) macro for creating machines with little
//! boilerplate. All three run the same validation as the mutators on
//! [`Fsm`].

pub mod machine;
pub mod macros;

pub use machine::FsmBuilder;

use crate::core::{Fsm, FsmError};
use machine::ensure_state;

/// Create a machine from `(src, des, action)` triples.
///
/// Each endpoint is registered the first time it appears. Transitions are
/// added in order and the first transition-level error is returned. The
/// cursor is left unset.
///
/// # Example
///
/// ```
/// use named_fsm::builder::build_from_triples;
///
/// let mut fsm = build_from_triples(
///     "BASIC",
///     &[
///         ("ACTIVE", "INACTIVE", "DEACTIVATE"),
///         ("INACTIVE", "ACTIVE", "ACTIVATE"),
///     ],
/// )
/// .unwrap();
///
/// fsm.init("ACTIVE").unwrap();
/// fsm.exec("DEACTIVATE", "INACTIVE").unwrap();
/// assert_eq!(fsm.get_state(), "INACTIVE");
/// ```
pub fn build_from_triples(name: &str, triples: &[(&str, &str, &str)]) -> Result<Fsm, FsmError> {
    let mut fsm = Fsm::new(name);

    for (src, des, action) in triples {
        ensure_state(&mut fsm, src)?;
        ensure_state(&mut fsm, des)?;
        fsm.add_trans(src, des, action)?;
    }

    Ok(fsm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples_build_a_ready_machine() {
        let fsm = build_from_triples(
            "BASIC",
            &[
                ("ACTIVE", "INACTIVE", "ACTIVATE"),
                ("INACTIVE", "ACTIVE", "DEACTIVATE"),
            ],
        )
        .unwrap();

        assert_eq!(fsm.states().len(), 2);
        assert_eq!(fsm.transitions().len(), 2);
        assert!(fsm.is_ready());
    }

    #[test]
    fn guard_shaped_machine_is_an_ordinary_machine() {
        let fsm = build_from_triples(
            "BASIC",
            &[("NOT_READY", "READY", "CHECK"), ("READY", "NOT_READY", "CHECK")],
        )
        .unwrap();

        assert!(fsm.exists_trans("READY", "NOT_READY", "CHECK"));
    }

    #[test]
    fn empty_triples_give_an_unready_machine() {
        let fsm = build_from_triples("EMPTY", &[]).unwrap();
        assert!(fsm.states().is_empty());
        assert!(!fsm.is_ready());
    }

    #[test]
    fn first_bad_triple_stops_the_build() {
        let result = build_from_triples(
            "BROKEN",
            &[("A", "B", "GO"), ("A", "B", "GO"), ("a", "B", "GO")],
        );

        assert!(matches!(
            result,
            Err(FsmError::TransitionAlreadyExists { .. })
        ));
    }
}
