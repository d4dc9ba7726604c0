//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder, ready-made task shapes and the
//! `events!` macro.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::AutomatonBuilder;

use crate::automaton::Automaton;

/// Create the automaton of an ordered-goals task.
///
/// The goals must be reached in the given order: states `q0` (initial)
/// through `qN` (final), with `q(i) --symbols[i]--> q(i+1)`. Reaching a goal
/// out of order leaves the automaton where it is.
///
/// # Example
///
/// ```
/// use tl_automaton::builder::sequence_task;
/// use tl_automaton::events;
///
/// let mut automaton = sequence_task(["g1", "g2"]).unwrap();
///
/// automaton.step(&events! { "g2" => true }).unwrap();
/// assert!(!automaton.in_final());
///
/// automaton.step(&events! { "g1" => true }).unwrap();
/// automaton.step(&events! { "g2" => true }).unwrap();
/// assert!(automaton.in_final());
/// ```
pub fn sequence_task<I, S>(symbols: I) -> Result<Automaton, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
    let state = |index: usize| format!("q{index}");

    let mut builder = AutomatonBuilder::new().initial(state(0));
    for (index, symbol) in symbols.iter().enumerate() {
        builder = builder.transition(state(index), state(index + 1), symbol.as_str());
    }
    if !symbols.is_empty() {
        builder = builder.accepting(state(symbols.len()));
    }
    builder.build()
}
