//! Build errors for the automaton builder.

use crate::automaton::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton through [`AutomatonBuilder`](super::AutomatonBuilder).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
