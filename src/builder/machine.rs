//! Builder for constructing state machines.

use crate::core::{Fsm, FsmError};

/// Builder for constructing state machines with a fluent API.
///
/// States named by transitions are registered on demand, so a machine can
/// be described by its edges alone.
///
/// # Example
///
/// ```rust
/// use named_fsm::builder::FsmBuilder;
///
/// let fsm = FsmBuilder::new("Task")
///     .transition("PENDING", "RUNNING", "START")
///     .transition("RUNNING", "DONE", "FINISH")
///     .transition("RUNNING", "FAILED", "FAIL")
///     .initial("PENDING")
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.get_state(), "PENDING");
/// assert_eq!(fsm.states().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FsmBuilder {
    name: String,
    states: Vec<String>,
    transitions: Vec<(String, String, String)>,
    initial: Option<String>,
}

impl FsmBuilder {
    /// Create a new builder for a machine labelled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Register a state up front, e.g. one no transition touches.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Add the transition `(src, des, action)`.
    pub fn transition(
        mut self,
        src: impl Into<String>,
        des: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.transitions
            .push((src.into(), des.into(), action.into()));
        self
    }

    /// Set the state the cursor starts at (optional).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Build the state machine.
    ///
    /// Registers the explicit states, then each transition in order along
    /// with any endpoint not yet known, then sets the initial state.
    /// Returns the first error met; repeated state names are not an error.
    pub fn build(self) -> Result<Fsm, FsmError> {
        let mut fsm = Fsm::new(self.name);

        for state in &self.states {
            ensure_state(&mut fsm, state)?;
        }
        for (src, des, action) in &self.transitions {
            ensure_state(&mut fsm, src)?;
            ensure_state(&mut fsm, des)?;
            fsm.add_trans(src, des, action)?;
        }
        if let Some(initial) = &self.initial {
            fsm.init(initial)?;
        }

        Ok(fsm)
    }
}

/// Register `name` unless it is already present.
pub(crate) fn ensure_state(fsm: &mut Fsm, name: &str) -> Result<(), FsmError> {
    match fsm.add_state(name) {
        Ok(()) | Err(FsmError::StateAlreadyExists { .. }) => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_registers_endpoints_lazily() {
        let fsm = FsmBuilder::new("Toggle")
            .transition("ACTIVE", "INACTIVE", "DEACTIVATE")
            .transition("INACTIVE", "ACTIVE", "ACTIVATE")
            .build()
            .unwrap();

        let names: Vec<&str> = fsm.states().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["ACTIVE", "INACTIVE"]);
        assert_eq!(fsm.transitions().len(), 2);
        assert!(fsm.is_ready());
        assert!(fsm.current().is_none());
    }

    #[test]
    fn builder_tolerates_repeated_states() {
        let fsm = FsmBuilder::new("Repeat")
            .state("A")
            .state("A")
            .transition("A", "B", "GO")
            .build()
            .unwrap();

        assert_eq!(fsm.states().len(), 2);
    }

    #[test]
    fn builder_keeps_isolated_states() {
        let fsm = FsmBuilder::new("Isolated")
            .state("ARCHIVED")
            .transition("OPEN", "CLOSED", "CLOSE")
            .build()
            .unwrap();

        assert!(fsm.exists_state("ARCHIVED"));
    }

    #[test]
    fn builder_stops_at_duplicate_transition() {
        let result = FsmBuilder::new("Dups")
            .transition("A", "B", "GO")
            .transition("A", "B", "GO")
            .build();

        assert!(matches!(
            result,
            Err(FsmError::TransitionAlreadyExists { .. })
        ));
    }

    #[test]
    fn builder_propagates_invalid_names() {
        let result = FsmBuilder::new("Bad")
            .transition("A", "b", "GO")
            .build();
        assert_eq!(
            result.unwrap_err(),
            FsmError::InvalidName {
                name: "b".to_string()
            }
        );

        let result = FsmBuilder::new("Bad action")
            .transition("A", "B", "go")
            .build();
        assert!(matches!(result, Err(FsmError::InvalidName { .. })));
    }

    #[test]
    fn builder_rejects_unknown_initial_state() {
        let result = FsmBuilder::new("Initial")
            .transition("A", "B", "GO")
            .initial("C")
            .build();

        assert_eq!(
            result.unwrap_err(),
            FsmError::StateNotFound {
                name: "C".to_string()
            }
        );
    }
}
