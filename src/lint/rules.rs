//! Lint rules for automaton graphs using Validation.

use crate::automaton::Automaton;
use crate::core::StateId;
use crate::lint::violations::LintViolation;
use std::collections::{BTreeSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom lint check functions
pub type LintCheck =
    Box<dyn Fn(&Automaton) -> Validation<(), NonEmptyVec<LintViolation>> + Send + Sync>;

/// Lint rules for an automaton's graph.
/// Uses Validation to accumulate ALL violations.
pub struct LintRules {
    pub(crate) require_initial: bool,
    pub(crate) require_final: bool,
    pub(crate) require_final_reachable: bool,
    pub(crate) forbid_dead_ends: bool,
    pub(crate) custom_checks: Vec<LintCheck>,
}

impl LintRules {
    /// Initial state present, final state present and reachable.
    pub fn standard() -> Self {
        crate::lint::LintBuilder::new()
            .require_initial()
            .require_final()
            .require_final_reachable()
            .build()
    }

    /// Check every rule, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    pub fn check(&self, automaton: &Automaton) -> Validation<(), NonEmptyVec<LintViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LintViolation>>> = Vec::new();

        if self.require_initial {
            checks.push(match automaton.initial_state() {
                Some(_) => Validation::success(()),
                None => Validation::fail(LintViolation::MissingInitialState),
            });
        }

        if self.require_final {
            checks.push(match automaton.final_state() {
                Some(_) => Validation::success(()),
                None => Validation::fail(LintViolation::MissingFinalState),
            });
        }

        // Only meaningful once both ends exist; the rules above report otherwise.
        if self.require_final_reachable {
            if let (Some(initial), Some(accepting)) =
                (automaton.initial_state(), automaton.final_state())
            {
                let check = if reachable(automaton, initial).contains(accepting) {
                    Validation::success(())
                } else {
                    Validation::fail(LintViolation::FinalUnreachable {
                        initial: initial.clone(),
                        accepting: accepting.clone(),
                    })
                };
                checks.push(check);
            }
        }

        if self.forbid_dead_ends {
            for (state, role) in automaton.states() {
                if !role.is_final() && automaton.outgoing(state).next().is_none() {
                    checks.push(Validation::fail(LintViolation::DeadEnd {
                        state: state.clone(),
                    }));
                }
            }
        }

        for check_fn in &self.custom_checks {
            checks.push(check_fn(automaton));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// States reachable from `start` (inclusive), breadth first.
fn reachable<'a>(automaton: &'a Automaton, start: &'a StateId) -> BTreeSet<&'a StateId> {
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(state) = queue.pop_front() {
        for (_, target) in automaton.outgoing(state) {
            if seen.insert(target) {
                queue.push_back(target);
            }
        }
    }
    seen
}
