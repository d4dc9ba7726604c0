//! State identifiers and role tags.
//!
//! States are opaque tokens: either a small integer or a short name.
//! Roles replace free-form role strings with a closed set of variants
//! that is validated once, at construction time.

use crate::automaton::AutomatonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a state, unique within one automaton.
///
/// # Example
///
/// ```rust
/// use tl_automaton::core::StateId;
///
/// let by_index = StateId::from(3);
/// let by_name = StateId::from("q0");
///
/// assert_eq!(by_index.to_string(), "3");
/// assert_eq!(by_name.to_string(), "q0");
/// assert_ne!(by_index, by_name);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateId {
    Int(i64),
    Name(String),
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for StateId {
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<i32> for StateId {
    fn from(index: i32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<u32> for StateId {
    fn from(index: u32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

/// Role carried by a state.
///
/// At most one state of an automaton is `Initial` and at most one is
/// `Final`; the automaton enforces this by demoting the previous holder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateRole {
    #[default]
    Untagged,
    Initial,
    Final,
}

impl StateRole {
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final)
    }
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Untagged => "untagged",
            Self::Initial => "initial",
            Self::Final => "final",
        };
        f.write_str(text)
    }
}

/// Parses the role tags accepted from untyped sources.
///
/// `"init"` and `"initial"` mark the initial state, `"final"` the accepting
/// one; `"none"` and the empty string mean untagged. Anything else is an
/// [`AutomatonError::InvalidRole`].
///
/// ```rust
/// use tl_automaton::core::StateRole;
///
/// assert_eq!("init".parse::<StateRole>().unwrap(), StateRole::Initial);
/// assert_eq!("final".parse::<StateRole>().unwrap(), StateRole::Final);
/// assert!("normal".parse::<StateRole>().is_err());
/// ```
impl FromStr for StateRole {
    type Err = AutomatonError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "init" | "initial" => Ok(Self::Initial),
            "final" => Ok(Self::Final),
            "" | "none" => Ok(Self::Untagged),
            other => Err(AutomatonError::InvalidRole {
                role: other.to_string(),
            }),
        }
    }
}
