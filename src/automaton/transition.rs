//! Edge and state-spec values fed to the construction API.

use crate::core::{StateId, StateRole};
use serde::{Deserialize, Serialize};

/// A directed, symbol-labeled edge between two states.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub source: StateId,
    pub target: StateId,
    pub symbol: String,
}

impl Transition {
    pub fn new(
        source: impl Into<StateId>,
        target: impl Into<StateId>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            symbol: symbol.into(),
        }
    }
}

impl<A, B, C> From<(A, B, C)> for Transition
where
    A: Into<StateId>,
    B: Into<StateId>,
    C: Into<String>,
{
    fn from((source, target, symbol): (A, B, C)) -> Self {
        Self::new(source, target, symbol)
    }
}

/// One item of a batch state declaration.
///
/// The role is kept as raw text until the batch is applied, so that a batch
/// assembled from untyped input (a config file, a translator) can be
/// rejected as a whole when one of its tags is wrong.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateSpec {
    pub id: StateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl StateSpec {
    pub fn untagged(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            role: None,
        }
    }

    pub fn tagged(id: impl Into<StateId>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Some(role.into()),
        }
    }

    /// Resolve the raw tag into a role.
    pub fn resolve_role(&self) -> Result<StateRole, crate::automaton::AutomatonError> {
        match &self.role {
            Some(tag) => tag.parse(),
            None => Ok(StateRole::Untagged),
        }
    }
}

impl From<StateId> for StateSpec {
    fn from(id: StateId) -> Self {
        Self::untagged(id)
    }
}

impl From<&str> for StateSpec {
    fn from(id: &str) -> Self {
        Self::untagged(id)
    }
}

impl From<i32> for StateSpec {
    fn from(id: i32) -> Self {
        Self::untagged(id)
    }
}

impl From<i64> for StateSpec {
    fn from(id: i64) -> Self {
        Self::untagged(id)
    }
}

impl From<u32> for StateSpec {
    fn from(id: u32) -> Self {
        Self::untagged(id)
    }
}

impl<I: Into<StateId>> From<(I, StateRole)> for StateSpec {
    fn from((id, role): (I, StateRole)) -> Self {
        match role {
            StateRole::Untagged => Self::untagged(id),
            role => Self::tagged(id, role.to_string()),
        }
    }
}

impl<I: Into<StateId>> From<(I, &str)> for StateSpec {
    fn from((id, role): (I, &str)) -> Self {
        Self::tagged(id, role)
    }
}
