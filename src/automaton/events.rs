//! Per-tick event snapshots.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Mapping from event symbol to its "active this tick" flag.
///
/// A snapshot is built fresh every tick. Symbols missing from it count as
/// inactive.
///
/// # Example
///
/// ```rust
/// use tl_automaton::automaton::EventSnapshot;
///
/// let events: EventSnapshot = [("g1", true), ("g2", false)].into_iter().collect();
///
/// assert!(events.is_active("g1"));
/// assert!(!events.is_active("g2"));
/// assert!(!events.is_active("g3"));
/// assert_eq!(events.active().collect::<Vec<_>>(), vec!["g1"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSnapshot {
    signals: BTreeMap<String, bool>,
}

impl EventSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for `symbol`, replacing any previous value.
    pub fn set(&mut self, symbol: impl Into<String>, active: bool) -> &mut Self {
        self.signals.insert(symbol.into(), active);
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, symbol: impl Into<String>, active: bool) -> Self {
        self.set(symbol, active);
        self
    }

    pub fn is_active(&self, symbol: &str) -> bool {
        self.signals.get(symbol).copied().unwrap_or(false)
    }

    /// Symbols flagged active, in lexical order.
    pub fn active(&self) -> impl Iterator<Item = &str> + '_ {
        self.signals
            .iter()
            .filter(|(_, active)| **active)
            .map(|(symbol, _)| symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for EventSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self {
            signals: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<HashMap<String, bool>> for EventSnapshot {
    fn from(signals: HashMap<String, bool>) -> Self {
        signals.into_iter().collect()
    }
}

impl From<BTreeMap<String, bool>> for EventSnapshot {
    fn from(signals: BTreeMap<String, bool>) -> Self {
        Self { signals }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for EventSnapshot {
    fn from(signals: [(K, bool); N]) -> Self {
        signals.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symbols_are_inactive() {
        let events = EventSnapshot::new();
        assert!(events.is_empty());
        assert!(!events.is_active("g1"));
        assert_eq!(events.active().count(), 0);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut events = EventSnapshot::new();
        events.set("g1", true).set("g1", false);

        assert_eq!(events.len(), 1);
        assert!(!events.is_active("g1"));
    }

    #[test]
    fn active_lists_only_true_flags() {
        let events = EventSnapshot::new()
            .with("g2", true)
            .with("g1", true)
            .with("g3", false);

        assert_eq!(events.active().collect::<Vec<_>>(), vec!["g1", "g2"]);
    }

    #[test]
    fn converts_from_maps_and_arrays() {
        let mut map = HashMap::new();
        map.insert("g1".to_string(), true);
        let from_map = EventSnapshot::from(map);

        let from_array = EventSnapshot::from([("g1", true)]);
        assert_eq!(from_map, from_array);
    }

    #[test]
    fn serializes_as_plain_map() {
        let events = EventSnapshot::from([("g1", true), ("g2", false)]);
        let json = serde_json::to_string(&events).unwrap();
        assert_eq!(json, r#"{"g1":true,"g2":false}"#);

        let parsed: EventSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, events);
    }
}
