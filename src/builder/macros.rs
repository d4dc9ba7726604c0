//! Macros for ergonomic event snapshots.

/// Build an [`EventSnapshot`](crate::automaton::EventSnapshot) from
/// `symbol => flag` pairs.
///
/// # Example
///
/// ```
/// use tl_automaton::events;
///
/// let events = events! {
///     "g1" => true,
///     "g2" => false,
/// };
///
/// assert!(events.is_active("g1"));
/// assert!(!events.is_active("g2"));
/// ```
#[macro_export]
macro_rules! events {
    () => {
        $crate::automaton::EventSnapshot::new()
    };
    ($($symbol:expr => $active:expr),+ $(,)?) => {{
        let mut snapshot = $crate::automaton::EventSnapshot::new();
        $(
            snapshot.set($symbol, $active);
        )+
        snapshot
    }};
}
