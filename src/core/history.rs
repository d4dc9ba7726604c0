//! Transition history of an automaton.
//!
//! Every transition the stepper applies is recorded here. Outside the crate
//! the history is an immutable value: `record` returns a new history with the
//! entry appended. The owning automaton appends in place.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use tl_automaton::core::{StateId, StepRecord};
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: StateId::from("q0"),
///     to: StateId::from("q1"),
///     symbol: "g1".to_string(),
///     tick: 4,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.symbol, "g1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// State the automaton left
    pub from: StateId,
    /// State the automaton entered
    pub to: StateId,
    /// Event symbol that fired the transition
    pub symbol: String,
    /// Tick (1-based step count) at which the transition was applied
    pub tick: u64,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use tl_automaton::core::{StateHistory, StateId, StepRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(StepRecord {
///     from: StateId::from("q0"),
///     to: StateId::from("q1"),
///     symbol: "g1".to_string(),
///     tick: 1,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StepRecord {
///     from: StateId::from("q1"),
///     to: StateId::from("q2"),
///     symbol: "g2".to_string(),
///     tick: 5,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path().len(), 3); // q0 -> q1 -> q2
/// assert_eq!(history.symbols(), vec!["g1", "g2"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StepRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: StepRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(record);
        Self { transitions }
    }

    /// Append in place. Used by the automaton, which owns its history.
    pub(crate) fn push(&mut self, record: StepRecord) {
        self.transitions.push(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the `to`
    /// state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for record in &self.transitions {
            path.push(&record.to);
        }
        path
    }

    /// The word consumed by the automaton: one symbol per applied transition.
    pub fn symbols(&self) -> Vec<&str> {
        self.transitions.iter().map(|r| r.symbol.as_str()).collect()
    }

    /// Wall-clock time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were applied.
    pub fn transitions(&self) -> &[StepRecord] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}
