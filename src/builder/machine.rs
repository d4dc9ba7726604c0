//! Builder for constructing automata.

use crate::automaton::{Automaton, StateSpec, Transition};
use crate::builder::error::BuildError;
use crate::core::{StateId, StateRole};

/// Builder for constructing automata with a fluent API.
///
/// Unlike [`Automaton::new`], `build` insists on a complete task: an initial
/// state and at least one transition.
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<StateSpec>,
    transitions: Vec<Transition>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, id: impl Into<StateId>) -> Self {
        self.states.push(StateSpec::from((id, StateRole::Initial)));
        self
    }

    /// Set the accepting state.
    pub fn accepting(mut self, id: impl Into<StateId>) -> Self {
        self.states.push(StateSpec::from((id, StateRole::Final)));
        self
    }

    /// Declare an untagged state.
    pub fn state(mut self, id: impl Into<StateId>) -> Self {
        self.states.push(StateSpec::untagged(id));
        self
    }

    /// Declare a state with an untyped role tag, validated at build time.
    pub fn tagged(mut self, id: impl Into<StateId>, tag: impl Into<String>) -> Self {
        self.states.push(StateSpec::tagged(id, tag));
        self
    }

    /// Add a transition.
    pub fn transition(
        mut self,
        source: impl Into<StateId>,
        target: impl Into<StateId>,
        symbol: impl Into<String>,
    ) -> Self {
        self.transitions.push(Transition::new(source, target, symbol));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transition>,
    {
        self.transitions.extend(transitions.into_iter().map(Into::into));
        self
    }

    /// Build the automaton.
    /// Returns an error if a role tag is malformed or required parts are missing.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let mut automaton = Automaton::new();
        automaton.add_states(self.states)?;

        if automaton.initial_state().is_none() {
            return Err(BuildError::MissingInitialState);
        }

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        automaton.add_transitions(self.transitions);
        Ok(automaton)
    }
}
