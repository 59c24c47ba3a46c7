//! The state machine: registry, transition table, cursor and execution.

use super::error::FsmError;
use super::name::is_valid_name;
use super::readiness::Readiness;
use super::state::State;
use super::transition::Transition;
use std::fmt;

/// A finite state machine over named states.
///
/// An `Fsm` exclusively owns its state registry, its transition table, its
/// cursor and its readiness guard. All mutators work in place and either
/// succeed completely or leave the machine untouched. Nothing here is
/// synchronized; share an instance across threads behind a lock.
///
/// # Example
///
/// ```rust
/// use named_fsm::core::Fsm;
///
/// let mut fsm = Fsm::new("Feature flag");
/// fsm.add_state("DISABLED").unwrap();
/// fsm.add_state("ENABLED").unwrap();
/// fsm.add_trans("DISABLED", "ENABLED", "ENABLE").unwrap();
/// fsm.add_trans("ENABLED", "DISABLED", "DISABLE").unwrap();
/// fsm.init("DISABLED").unwrap();
///
/// let mut seen = Vec::new();
/// fsm.exec_with("ENABLE", "ENABLED", |prev, new, action| {
///     seen.push(format!("{prev} -{action}-> {new}"));
/// })
/// .unwrap();
///
/// assert_eq!(fsm.get_state(), "ENABLED");
/// assert_eq!(seen, ["DISABLED -ENABLE-> ENABLED"]);
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    name: String,
    states: Vec<State>,
    transitions: Vec<Transition>,
    current: Option<State>,
    readiness: Readiness,
}

impl Fsm {
    /// Create an empty machine with a guard set to `NOT_READY`.
    ///
    /// `name` is a free-form label and is not checked against the name
    /// grammar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            transitions: Vec::new(),
            current: None,
            readiness: Readiness::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a new state.
    pub fn add_state(&mut self, name: &str) -> Result<(), FsmError> {
        let state = State::new(name)?;
        if self.exists_state(name) {
            return Err(FsmError::StateAlreadyExists {
                name: name.to_string(),
            });
        }

        tracing::debug!(fsm = %self.name, state = name, "state added");
        self.states.push(state);
        Ok(())
    }

    /// Check whether `name` is a registered state.
    pub fn exists_state(&self, name: &str) -> bool {
        self.find_state(name).is_some()
    }

    /// Registered states in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Register the transition `(src, des, action)`.
    ///
    /// Both endpoints must already be registered. Several transitions may
    /// share a source and an action as long as their destinations differ.
    pub fn add_trans(&mut self, src: &str, des: &str, action: &str) -> Result<(), FsmError> {
        if !is_valid_name(action) {
            return Err(FsmError::invalid_name(action));
        }
        let from = self
            .find_state(src)
            .cloned()
            .ok_or_else(|| FsmError::state_not_found(src))?;
        let to = self
            .find_state(des)
            .cloned()
            .ok_or_else(|| FsmError::state_not_found(des))?;

        if self.exists_trans(src, des, action) {
            return Err(FsmError::TransitionAlreadyExists {
                from: src.to_string(),
                to: des.to_string(),
                action: action.to_string(),
            });
        }

        tracing::debug!(fsm = %self.name, from = src, to = des, action, "transition added");
        self.transitions.push(Transition {
            from,
            to,
            action: action.to_string(),
        });
        self.readiness = self.readiness.check(self.is_configured());
        Ok(())
    }

    /// Check whether the exact triple `(src, des, action)` is registered.
    pub fn exists_trans(&self, src: &str, des: &str, action: &str) -> bool {
        self.transitions
            .iter()
            .any(|t| t.matches(src, des, action))
    }

    /// Registered transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Human-readable dump of every transition, one per line.
    ///
    /// The first line is `Transitions <name>:`, followed by
    /// `<action> (<src>) -> (<des>)` for each transition in insertion order.
    /// Meant for diagnostics only; use [`Fsm::export`] to persist a machine.
    pub fn get_trans(&self) -> String {
        self.to_string()
    }

    /// Point the cursor at `name`.
    ///
    /// May be called at any time to reset the cursor. On failure the cursor
    /// keeps its previous value.
    pub fn init(&mut self, name: &str) -> Result<(), FsmError> {
        let state = self
            .find_state(name)
            .cloned()
            .ok_or_else(|| FsmError::state_not_found(name))?;

        tracing::debug!(fsm = %self.name, state = name, "cursor initialised");
        self.current = Some(state);
        Ok(())
    }

    /// Name of the current state, or `""` before [`Fsm::init`] was called.
    pub fn get_state(&self) -> &str {
        self.current.as_ref().map(State::name).unwrap_or_default()
    }

    /// Current state, if the cursor has been set.
    pub fn current(&self) -> Option<&State> {
        self.current.as_ref()
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Check whether the guard allows [`Fsm::exec`].
    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    /// Fire `action` towards `des` from the current state.
    ///
    /// Succeeds only if `(current, des, action)` is a registered transition,
    /// in which case the cursor moves to `des`.
    ///
    /// # Errors
    ///
    /// - [`FsmError::NotReady`] if the machine has no transition yet
    /// - [`FsmError::StateNotFound`] if `des` is not registered
    /// - [`FsmError::ExecutionNotAllowed`] if no transition matches, which
    ///   includes the case where the cursor was never set
    pub fn exec(&mut self, action: &str, des: &str) -> Result<(), FsmError> {
        self.fire(action, des).map(|_| ())
    }

    /// Like [`Fsm::exec`], then notify `callback(previous, new, action)`.
    ///
    /// The cursor is updated before the callback runs, and the callback is
    /// never invoked on failure.
    pub fn exec_with<F>(&mut self, action: &str, des: &str, callback: F) -> Result<(), FsmError>
    where
        F: FnOnce(&str, &str, &str),
    {
        let previous = self.fire(action, des)?;
        callback(previous.name(), self.get_state(), action);
        Ok(())
    }

    /// Move the cursor along the first matching transition and return the
    /// state it left.
    fn fire(&mut self, action: &str, des: &str) -> Result<State, FsmError> {
        if !self.readiness.is_ready() {
            return Err(FsmError::NotReady);
        }
        if !self.exists_state(des) {
            return Err(FsmError::state_not_found(des));
        }

        let not_allowed = |from: &str| FsmError::ExecutionNotAllowed {
            from: from.to_string(),
            to: des.to_string(),
            action: action.to_string(),
        };
        let previous = self.current.clone().ok_or_else(|| not_allowed(""))?;
        let next = self
            .transitions
            .iter()
            .find(|t| t.matches(previous.name(), des, action))
            .map(|t| t.to.clone())
            .ok_or_else(|| not_allowed(previous.name()))?;

        tracing::debug!(
            fsm = %self.name,
            from = previous.name(),
            to = des,
            action,
            "transition executed"
        );
        self.current = Some(next);
        Ok(previous)
    }

    fn find_state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name() == name)
    }

    fn is_configured(&self) -> bool {
        !self.states.is_empty() && !self.transitions.is_empty()
    }
}

impl fmt::Display for Fsm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transitions {}:", self.name)?;
        for transition in &self.transitions {
            writeln!(f, "{transition}")?;
        }
        Ok(())
    }
}
