//! The automaton: graph store, construction API and stepper.
//!
//! # Key Concepts
//!
//! - **Graph store**: states with an optional role and at most one edge per
//!   `(state, symbol)` pair
//! - **Stepper**: consumes one [`EventSnapshot`] per tick and follows at most
//!   one edge
//! - **Outcome**: every step returns an immutable [`StepOutcome`]
//!
//! At most one event may fire per tick. Simultaneous events are a caller
//! error ([`AutomatonError::AmbiguousInput`]), never resolved by priority.

mod error;
mod events;
mod machine;
mod stepper;
mod transition;

pub use error::AutomatonError;
pub use events::EventSnapshot;
pub use machine::Automaton;
pub use stepper::{StepOutcome, StepResult};
pub use transition::{StateSpec, Transition};
