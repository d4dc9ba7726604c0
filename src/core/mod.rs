//! Core value types shared by the rest of the crate:
//! - State identifiers and role tags
//! - Immutable transition history
//!
//! Nothing in this module mutates shared state.

mod history;
mod state;

pub use history::{StateHistory, StepRecord};
pub use state::{StateId, StateRole};
