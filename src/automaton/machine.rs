//! Graph store and construction API.

use crate::automaton::error::AutomatonError;
use crate::automaton::transition::{StateSpec, Transition};
use crate::core::{StateHistory, StateId, StateRole};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Deterministic finite automaton tracking the progress of a temporal task.
///
/// The automaton owns its states (id to role), its edges (one target per
/// `(state, symbol)` pair), the alphabet of symbols used as edge labels and
/// the current-state pointer. It is built once per episode, stepped once per
/// tick and thrown away when the episode ends.
///
/// # Example
///
/// ```rust
/// use tl_automaton::automaton::{Automaton, EventSnapshot};
/// use tl_automaton::core::{StateId, StateRole};
///
/// let mut automaton = Automaton::new();
/// automaton.add_state("q0", StateRole::Initial);
/// automaton.add_state("q1", StateRole::Final);
/// automaton.add_transition("q0", "q1", "g1");
///
/// let outcome = automaton.step(&EventSnapshot::from([("g1", true)])).unwrap();
/// assert_eq!(outcome.current, StateId::from("q1"));
/// assert!(automaton.in_final());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Automaton {
    pub(super) states: BTreeMap<StateId, StateRole>,
    pub(super) edges: BTreeMap<StateId, BTreeMap<String, StateId>>,
    pub(super) alphabet: BTreeSet<String>,
    pub(super) initial: Option<StateId>,
    pub(super) accepting: Option<StateId>,
    pub(super) current: Option<StateId>,
    pub(super) history: StateHistory,
    pub(super) ticks: u64,
}

impl Automaton {
    /// Create an empty automaton with no current state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state, or update the role of an existing one.
    ///
    /// Tagging a state `Initial` makes it the current state right away and
    /// demotes the previous initial state, if any. Tagging a state `Final`
    /// demotes the previous final state.
    pub fn add_state(&mut self, id: impl Into<StateId>, role: StateRole) {
        self.assign_role(id.into(), role);
    }

    /// Register a state whose role comes as an untyped tag.
    ///
    /// Fails with [`AutomatonError::InvalidRole`] when the tag is not one of
    /// the accepted role names; the graph is left untouched in that case.
    pub fn add_state_tagged(
        &mut self,
        id: impl Into<StateId>,
        tag: &str,
    ) -> Result<(), AutomatonError> {
        let role = tag.parse()?;
        self.assign_role(id.into(), role);
        Ok(())
    }

    /// Register a batch of states.
    ///
    /// Every role is validated before anything is applied: a single bad tag
    /// rejects the whole batch with [`AutomatonError::MalformedStateSpec`].
    pub fn add_states<I, T>(&mut self, specs: I) -> Result<(), AutomatonError>
    where
        I: IntoIterator<Item = T>,
        T: Into<StateSpec>,
    {
        let resolved = specs
            .into_iter()
            .map(Into::into)
            .enumerate()
            .map(|(index, spec)| match spec.resolve_role() {
                Ok(role) => Ok((spec.id, role)),
                Err(err) => Err(AutomatonError::MalformedStateSpec {
                    index,
                    id: spec.id,
                    reason: err.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (id, role) in resolved {
            self.assign_role(id, role);
        }
        Ok(())
    }

    /// Register a directed edge `source --symbol--> target`.
    ///
    /// Unknown endpoints are added as untagged states. A second edge for the
    /// same `(source, symbol)` pair replaces the first one.
    pub fn add_transition(
        &mut self,
        source: impl Into<StateId>,
        target: impl Into<StateId>,
        symbol: impl Into<String>,
    ) {
        let (source, target, symbol) = (source.into(), target.into(), symbol.into());

        self.states.entry(source.clone()).or_default();
        self.states.entry(target.clone()).or_default();
        self.alphabet.insert(symbol.clone());

        let outgoing = self.edges.entry(source.clone()).or_default();
        if let Some(replaced) = outgoing.insert(symbol.clone(), target.clone()) {
            if replaced != target {
                debug!(
                    source = %source,
                    symbol = %symbol,
                    replaced = %replaced,
                    target = %target,
                    "Transition redefined, keeping the latest target"
                );
            }
        }
    }

    /// Register a batch of edges.
    pub fn add_transitions<I, T>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Transition>,
    {
        for transition in transitions {
            let Transition {
                source,
                target,
                symbol,
            } = transition.into();
            self.add_transition(source, target, symbol);
        }
    }

    fn assign_role(&mut self, id: StateId, role: StateRole) {
        let previous = self.states.insert(id.clone(), role);

        // Re-tagging a designated state drops its old designation.
        if previous == Some(StateRole::Initial) && role != StateRole::Initial {
            self.initial = None;
        }
        if previous == Some(StateRole::Final) && role != StateRole::Final {
            self.accepting = None;
        }

        match role {
            StateRole::Initial => {
                if let Some(old) = self.initial.replace(id.clone()) {
                    self.demote(&old, StateRole::Initial, &id);
                }
                self.current = Some(id);
            }
            StateRole::Final => {
                if let Some(old) = self.accepting.replace(id.clone()) {
                    self.demote(&old, StateRole::Final, &id);
                }
            }
            StateRole::Untagged => {}
        }
    }

    fn demote(&mut self, old: &StateId, role: StateRole, replacement: &StateId) {
        if old == replacement {
            return;
        }
        if let Some(current_role) = self.states.get_mut(old) {
            if *current_role == role {
                *current_role = StateRole::Untagged;
                debug!(state = %old, replacement = %replacement, role = %role, "State designation replaced");
            }
        }
    }

    /// Current state, `None` until an initial state is designated (pure)
    pub fn current_state(&self) -> Option<&StateId> {
        self.current.as_ref()
    }

    /// Whether the current state is the designated final state (pure)
    pub fn in_final(&self) -> bool {
        match (&self.current, &self.accepting) {
            (Some(current), Some(accepting)) => current == accepting,
            _ => false,
        }
    }

    pub fn initial_state(&self) -> Option<&StateId> {
        self.initial.as_ref()
    }

    pub fn final_state(&self) -> Option<&StateId> {
        self.accepting.as_ref()
    }

    pub fn role_of(&self, id: &StateId) -> Option<StateRole> {
        self.states.get(id).copied()
    }

    pub fn contains_state(&self, id: &StateId) -> bool {
        self.states.contains_key(id)
    }

    /// All states with their roles, ordered by id.
    pub fn states(&self) -> impl Iterator<Item = (&StateId, StateRole)> + '_ {
        self.states.iter().map(|(id, role)| (id, *role))
    }

    /// All edges, ordered by source then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.edges.iter().flat_map(|(source, outgoing)| {
            outgoing
                .iter()
                .map(move |(symbol, target)| Transition::new(source, target, symbol.as_str()))
        })
    }

    /// Target of the edge leaving `state` on `symbol`, if there is one.
    pub fn target(&self, state: &StateId, symbol: &str) -> Option<&StateId> {
        self.edges.get(state).and_then(|outgoing| outgoing.get(symbol))
    }

    /// Edges leaving `state` as `(symbol, target)` pairs, ordered by symbol.
    pub fn outgoing<'a>(
        &'a self,
        state: &StateId,
    ) -> impl Iterator<Item = (&'a str, &'a StateId)> + 'a {
        self.edges
            .get(state)
            .into_iter()
            .flat_map(|outgoing| outgoing.iter().map(|(symbol, target)| (symbol.as_str(), target)))
    }

    /// Symbols that label at least one edge.
    pub fn alphabet(&self) -> &BTreeSet<String> {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Transitions applied since construction or the last [`reset`](Self::reset).
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Number of successful steps taken.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Return to the initial state and forget the run so far.
    ///
    /// The graph itself is kept, so an episode loop can reuse one automaton
    /// instead of rebuilding it.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.history = StateHistory::new();
        self.ticks = 0;
    }
}
