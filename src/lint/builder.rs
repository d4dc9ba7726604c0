//! Builder API for creating lint rules.

use crate::automaton::Automaton;
use crate::lint::rules::{LintCheck, LintRules};
use crate::lint::violations::LintViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating lint rules
#[derive(Default)]
pub struct LintBuilder {
    require_initial: bool,
    require_final: bool,
    require_final_reachable: bool,
    forbid_dead_ends: bool,
    custom_checks: Vec<LintCheck>,
}

impl LintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a missing initial state
    pub fn require_initial(mut self) -> Self {
        self.require_initial = true;
        self
    }

    /// Report a missing final state
    pub fn require_final(mut self) -> Self {
        self.require_final = true;
        self
    }

    /// Report a final state no path from the initial state reaches
    pub fn require_final_reachable(mut self) -> Self {
        self.require_final_reachable = true;
        self
    }

    /// Report non-final states without outgoing transitions
    pub fn forbid_dead_ends(mut self) -> Self {
        self.forbid_dead_ends = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Automaton) -> Validation<(), NonEmptyVec<LintViolation>> + Send + Sync + 'static,
    {
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Automaton) -> bool + Send + Sync + 'static,
    {
        let check = move |automaton: &Automaton| {
            if predicate(automaton) {
                Validation::success(())
            } else {
                Validation::fail(LintViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Build the lint rules
    pub fn build(self) -> LintRules {
        LintRules {
            require_initial: self.require_initial,
            require_final: self.require_final,
            require_final_reachable: self.require_final_reachable,
            forbid_dead_ends: self.forbid_dead_ends,
            custom_checks: self.custom_checks,
        }
    }
}
