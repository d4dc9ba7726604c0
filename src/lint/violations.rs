//! Structural problems reported by lint rules.

use crate::core::StateId;
use thiserror::Error;

/// Problems a lint pass can find in an automaton's graph
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LintViolation {
    #[error("No initial state designated")]
    MissingInitialState,

    #[error("No final state designated")]
    MissingFinalState,

    #[error("Final state '{accepting}' is unreachable from initial state '{initial}'")]
    FinalUnreachable { initial: StateId, accepting: StateId },

    #[error("State '{state}' has no outgoing transitions and is not final")]
    DeadEnd { state: StateId },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
