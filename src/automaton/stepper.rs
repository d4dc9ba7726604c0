//! Event-driven stepping.

use crate::automaton::error::AutomatonError;
use crate::automaton::events::EventSnapshot;
use crate::automaton::machine::Automaton;
use crate::core::{StateId, StepRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// What a single step did
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    /// No symbol was active; the automaton stayed put
    Idle,

    /// One symbol was active but the current state has no edge for it
    Ignored { symbol: String },

    /// One symbol was active and its edge was followed
    Transitioned { symbol: String, to: StateId },
}

/// Immutable snapshot of the automaton after a step.
///
/// Callers read reward and termination signals from this value instead of
/// polling the automaton between steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// 1-based index of this step
    pub tick: u64,
    /// State before the step
    pub previous: StateId,
    /// State after the step
    pub current: StateId,
    /// Whether `current` is the designated final state
    pub accepting: bool,
    pub result: StepResult,
}

impl StepOutcome {
    /// Whether an edge was followed (self-loops included)
    pub fn transitioned(&self) -> bool {
        matches!(self.result, StepResult::Transitioned { .. })
    }

    /// The single active symbol of the tick, if there was one
    pub fn symbol(&self) -> Option<&str> {
        match &self.result {
            StepResult::Idle => None,
            StepResult::Ignored { symbol } | StepResult::Transitioned { symbol, .. } => {
                Some(symbol)
            }
        }
    }
}

impl Automaton {
    /// Advance the automaton by at most one transition.
    ///
    /// Every `true` entry of the snapshot counts as active, whether or not
    /// the symbol labels an edge. Missing keys count as inactive. A single
    /// active symbol outside the alphabet is ignored like any other symbol
    /// without an edge from the current state.
    ///
    /// # Errors
    ///
    /// - [`AutomatonError::NoCurrentState`] if no initial state was ever
    ///   designated. Checked first.
    /// - [`AutomatonError::AmbiguousInput`] if more than one symbol is
    ///   active. The current state is left unchanged.
    pub fn step(&mut self, events: &EventSnapshot) -> Result<StepOutcome, AutomatonError> {
        let Some(previous) = self.current.clone() else {
            warn!("Step rejected: no initial state designated");
            return Err(AutomatonError::NoCurrentState);
        };

        let active: Vec<&str> = events.active().collect();

        if active.len() > 1 {
            warn!(state = %previous, active = ?active, "Step rejected: simultaneous events");
            return Err(AutomatonError::AmbiguousInput {
                active: active.iter().map(|s| s.to_string()).collect(),
            });
        }

        self.ticks += 1;
        let tick = self.ticks;

        let result = match active.first() {
            None => {
                trace!(tick, state = %previous, "No event active");
                StepResult::Idle
            }
            Some(&symbol) if !self.alphabet.contains(symbol) => {
                trace!(tick, state = %previous, symbol, "Event outside the alphabet");
                StepResult::Ignored {
                    symbol: symbol.to_string(),
                }
            }
            Some(&symbol) => match self.target(&previous, symbol).cloned() {
                Some(to) => {
                    debug!(tick, from = %previous, to = %to, symbol, "Transition applied");
                    self.history.push(StepRecord {
                        from: previous.clone(),
                        to: to.clone(),
                        symbol: symbol.to_string(),
                        tick,
                        timestamp: Utc::now(),
                    });
                    StepResult::Transitioned {
                        symbol: symbol.to_string(),
                        to,
                    }
                }
                None => {
                    trace!(tick, state = %previous, symbol, "Event has no edge from current state");
                    StepResult::Ignored {
                        symbol: symbol.to_string(),
                    }
                }
            },
        };

        let current = match &result {
            StepResult::Transitioned { to, .. } => to.clone(),
            StepResult::Idle | StepResult::Ignored { .. } => previous.clone(),
        };
        let accepting = self.accepting.as_ref() == Some(&current);
        self.current = Some(current.clone());

        Ok(StepOutcome {
            tick,
            previous,
            current,
            accepting,
            result,
        })
    }
}
