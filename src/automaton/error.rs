//! Errors raised while building or stepping an automaton.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when constructing or stepping an automaton.
///
/// Construction errors never leave a partial mutation behind; stepping
/// errors leave the current state untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AutomatonError {
    #[error(
        "Invalid state role '{role}': expected 'init', 'initial', 'final', 'none' or an empty tag"
    )]
    InvalidRole { role: String },

    #[error("Malformed state spec at position {index} (state '{id}'): {reason}")]
    MalformedStateSpec {
        index: usize,
        id: StateId,
        reason: String,
    },

    #[error("No current state. Designate an initial state before stepping")]
    NoCurrentState,

    #[error("Ambiguous input: {} events active in one tick ({})", .active.len(), .active.join(", "))]
    AmbiguousInput { active: Vec<String> },
}
