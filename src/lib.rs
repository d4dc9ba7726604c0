//! tl-automaton: deterministic automata for temporal-logic goal tracking
//!
//! A reinforcement-learning environment describes its task as an ordered
//! temporal specification ("reach goal 1, then goal 2"). The specification is
//! turned into a deterministic finite automaton once per episode, and every
//! simulation tick the environment feeds the automaton a snapshot of boolean
//! events. Reward shaping and termination read the automaton's state back.
//!
//! # Core Concepts
//!
//! - **Automaton**: states with an optional role (initial / final) and
//!   symbol-labeled edges, at most one per `(state, symbol)` pair
//! - **Events**: one [`EventSnapshot`](automaton::EventSnapshot) per tick; at
//!   most one event may be active
//! - **Outcome**: each step returns an immutable
//!   [`StepOutcome`](automaton::StepOutcome)
//! - **History**: applied transitions are recorded for inspection
//!
//! # Example
//!
//! ```rust
//! use tl_automaton::automaton::{Automaton, AutomatonError};
//! use tl_automaton::core::{StateId, StateRole};
//! use tl_automaton::events;
//!
//! let mut automaton = Automaton::new();
//! automaton
//!     .add_states(vec![
//!         ("q0", StateRole::Initial),
//!         ("q1", StateRole::Untagged),
//!         ("q2", StateRole::Final),
//!     ])
//!     .unwrap();
//! automaton.add_transitions([("q0", "q1", "g1"), ("q1", "q2", "g2")]);
//!
//! let outcome = automaton.step(&events! { "g1" => true, "g2" => false }).unwrap();
//! assert_eq!(outcome.current, StateId::from("q1"));
//!
//! let err = automaton.step(&events! { "g1" => true, "g2" => true }).unwrap_err();
//! assert!(matches!(err, AutomatonError::AmbiguousInput { .. }));
//!
//! let outcome = automaton.step(&events! { "g2" => true }).unwrap();
//! assert!(outcome.accepting);
//! assert!(automaton.in_final());
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod definition;
pub mod export;
pub mod lint;
pub mod logging;

// Re-export commonly used types
pub use automaton::{Automaton, AutomatonError, EventSnapshot, StepOutcome, StepResult};
pub use builder::{sequence_task, AutomatonBuilder};
pub use crate::core::{StateId, StateRole};
pub use definition::AutomatonDefinition;
