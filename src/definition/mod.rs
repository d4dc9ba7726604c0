//! Serialized automaton definitions.
//!
//! A definition is the construction-time description of an automaton: the
//! list of states and transitions an environment (or an upstream formula
//! translator) hands over once per episode. Definitions are plain JSON so
//! tasks can live in configuration files next to the environment config.
//!
//! ```json
//! {
//!   "version": 1,
//!   "states": [{ "id": "q0", "role": "init" }, "q1", { "id": "q2", "role": "final" }],
//!   "transitions": [
//!     { "source": "q0", "target": "q1", "symbol": "g1" },
//!     { "source": "q1", "target": "q2", "symbol": "g2" }
//!   ]
//! }
//! ```
//!
//! A definition carries no run state: building it always yields an
//! automaton sitting in its initial state.

use crate::automaton::{Automaton, StateSpec, Transition};
use crate::core::{StateId, StateRole};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub mod error;

pub use error::DefinitionError;

/// Version identifier for the definition format
pub const DEFINITION_VERSION: u32 = 1;

fn default_version() -> u32 {
    DEFINITION_VERSION
}

/// One state entry: a bare id, or an id with a role tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateEntry {
    Bare(StateId),
    Spec(StateSpec),
}

impl From<StateEntry> for StateSpec {
    fn from(entry: StateEntry) -> Self {
        match entry {
            StateEntry::Bare(id) => StateSpec::untagged(id),
            StateEntry::Spec(spec) => spec,
        }
    }
}

/// Serializable description of an automaton's graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    /// Definition format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// States, in declaration order
    #[serde(default)]
    pub states: Vec<StateEntry>,

    /// Transitions, in declaration order
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl Default for AutomatonDefinition {
    fn default() -> Self {
        Self {
            version: DEFINITION_VERSION,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

impl AutomatonDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    /// Read and parse a definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded automaton definition");
        Self::from_json(&json)
    }

    /// Render the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    fn check_version(&self) -> Result<(), DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(())
    }

    /// Build a fresh automaton from this definition.
    ///
    /// States are applied as one batch, so a malformed role tag rejects the
    /// definition before any transition is added.
    pub fn build(&self) -> Result<Automaton, DefinitionError> {
        self.check_version()?;

        let mut automaton = Automaton::new();
        automaton.add_states(self.states.iter().cloned().map(StateSpec::from))?;
        automaton.add_transitions(self.transitions.iter().cloned());

        debug!(
            states = automaton.state_count(),
            transitions = automaton.transition_count(),
            "Built automaton from definition"
        );
        Ok(automaton)
    }
}

impl From<&Automaton> for AutomatonDefinition {
    fn from(automaton: &Automaton) -> Self {
        let states = automaton
            .states()
            .map(|(id, role)| match role {
                StateRole::Untagged => StateEntry::Bare(id.clone()),
                role => StateEntry::Spec(StateSpec::from((id, role))),
            })
            .collect();

        Self {
            version: DEFINITION_VERSION,
            states,
            transitions: automaton.transitions().collect(),
        }
    }
}

impl Automaton {
    /// Describe this automaton's graph. Run state is not included.
    pub fn definition(&self) -> AutomatonDefinition {
        AutomatonDefinition::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonError;
    use crate::events;
    use std::io::Write;

    const DOUBLE_GOAL: &str = r#"{
        "version": 1,
        "states": [{"id": "q0", "role": "init"}, "q1", {"id": "q2", "role": "final"}],
        "transitions": [
            {"source": "q0", "target": "q1", "symbol": "g1"},
            {"source": "q1", "target": "q2", "symbol": "g2"}
        ]
    }"#;

    #[test]
    fn parses_and_builds_definition() {
        let definition = AutomatonDefinition::from_json(DOUBLE_GOAL).unwrap();
        assert_eq!(definition.states.len(), 3);
        assert_eq!(definition.states[1], StateEntry::Bare(StateId::from("q1")));

        let mut automaton = definition.build().unwrap();
        assert_eq!(automaton.current_state(), Some(&StateId::from("q0")));

        automaton.step(&events! { "g1" => true }).unwrap();
        automaton.step(&events! { "g2" => true }).unwrap();
        assert!(automaton.in_final());
    }

    #[test]
    fn integer_ids_are_supported() {
        let json = r#"{
            "states": [{"id": 1, "role": "init"}, 2],
            "transitions": [{"source": 1, "target": 2, "symbol": "x"}]
        }"#;
        let automaton = AutomatonDefinition::from_json(json).unwrap().build().unwrap();

        assert_eq!(automaton.initial_state(), Some(&StateId::from(1)));
        assert_eq!(automaton.target(&StateId::from(1), "x"), Some(&StateId::from(2)));
    }

    #[test]
    fn missing_version_defaults_to_current() {
        let definition = AutomatonDefinition::from_json(r#"{"states": ["a"]}"#).unwrap();
        assert_eq!(definition.version, DEFINITION_VERSION);
        assert!(definition.transitions.is_empty());
    }

    #[test]
    fn rejects_unsupported_version() {
        let result = AutomatonDefinition::from_json(r#"{"version": 99}"#);
        assert!(matches!(
            result,
            Err(DefinitionError::UnsupportedVersion {
                found: 99,
                supported: DEFINITION_VERSION
            })
        ));
    }

    #[test]
    fn rejects_unknown_state_keys() {
        let result = AutomatonDefinition::from_json(r#"{"states": [{"id": 4, "typo": "final"}]}"#);
        assert!(matches!(result, Err(DefinitionError::DeserializationFailed(_))));
    }

    #[test]
    fn malformed_role_rejects_build() {
        let definition =
            AutomatonDefinition::from_json(r#"{"states": [1, {"id": 3, "role": "normal"}]}"#)
                .unwrap();

        let result = definition.build();
        assert!(matches!(
            result,
            Err(DefinitionError::Automaton(AutomatonError::MalformedStateSpec { index: 1, .. }))
        ));
    }

    #[test]
    fn exported_definition_rebuilds_same_graph() {
        let original = AutomatonDefinition::from_json(DOUBLE_GOAL)
            .unwrap()
            .build()
            .unwrap();

        let json = original.definition().to_json().unwrap();
        let rebuilt = AutomatonDefinition::from_json(&json).unwrap().build().unwrap();

        assert_eq!(rebuilt.initial_state(), original.initial_state());
        assert_eq!(rebuilt.final_state(), original.final_state());
        assert_eq!(
            rebuilt.transitions().collect::<Vec<_>>(),
            original.transitions().collect::<Vec<_>>()
        );
        assert_eq!(
            rebuilt.states().collect::<Vec<_>>(),
            original.states().collect::<Vec<_>>()
        );
    }

    #[test]
    fn loads_definition_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOUBLE_GOAL.as_bytes()).unwrap();

        let definition = AutomatonDefinition::from_path(file.path()).unwrap();
        assert_eq!(definition.transitions.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let result = AutomatonDefinition::from_path("/nonexistent/automaton.json");
        match result {
            Err(DefinitionError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/automaton.json"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
