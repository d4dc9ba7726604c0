//! Graphviz rendering of an automaton.
//!
//! Produces DOT text: states are circles, the final state is a double
//! circle and a point-shaped start node points at the initial state. Render
//! the file with `dot -Tpdf automaton.dot -o automaton.pdf`.

use crate::automaton::Automaton;
use crate::core::StateId;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name used by [`write_default`].
pub const DEFAULT_DIAGRAM_FILE: &str = "automaton.dot";

/// Errors that can occur while writing a diagram
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write diagram to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn quoted(id: &StateId) -> String {
    quote(&id.to_string())
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Render the automaton's graph as DOT text.
///
/// # Example
///
/// ```rust
/// use tl_automaton::builder::sequence_task;
/// use tl_automaton::export::to_dot;
///
/// let dot = to_dot(&sequence_task(["g1"]).unwrap());
/// assert!(dot.contains("\"q1\" [shape=doublecircle];"));
/// assert!(dot.contains("\"q0\" -> \"q1\" [label=\"g1\"];"));
/// ```
pub fn to_dot(automaton: &Automaton) -> String {
    let mut dot = String::new();
    match render(automaton, &mut dot) {
        Ok(()) => dot,
        // fmt::Write for String never fails
        Err(fmt::Error) => String::new(),
    }
}

fn render(automaton: &Automaton, dot: &mut impl fmt::Write) -> fmt::Result {
    writeln!(dot, "digraph automaton {{")?;
    writeln!(dot, "    rankdir=LR;")?;
    writeln!(dot, "    node [shape=circle];")?;

    if let Some(initial) = automaton.initial_state() {
        writeln!(dot, "    __start [shape=point];")?;
        writeln!(dot, "    __start -> {};", quoted(initial))?;
    }

    for (id, role) in automaton.states() {
        if role.is_final() {
            writeln!(dot, "    {} [shape=doublecircle];", quoted(id))?;
        } else {
            writeln!(dot, "    {};", quoted(id))?;
        }
    }

    for transition in automaton.transitions() {
        writeln!(
            dot,
            "    {} -> {} [label={}];",
            quoted(&transition.source),
            quoted(&transition.target),
            quote(&transition.symbol)
        )?;
    }

    writeln!(dot, "}}")
}

/// Write the DOT rendering to `path`.
pub fn write_dot(automaton: &Automaton, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, to_dot(automaton)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Wrote automaton diagram");
    Ok(())
}

/// Write the DOT rendering to [`DEFAULT_DIAGRAM_FILE`] in the current
/// directory and return the path written.
pub fn write_default(automaton: &Automaton) -> Result<PathBuf, ExportError> {
    let path = std::env::current_dir()
        .map_err(|source| ExportError::Io {
            path: PathBuf::from(DEFAULT_DIAGRAM_FILE),
            source,
        })?
        .join(DEFAULT_DIAGRAM_FILE);
    write_dot(automaton, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateRole;

    fn drawing() -> Automaton {
        let mut automaton = Automaton::new();
        automaton.add_state("q1", StateRole::Untagged);
        automaton.add_state("q2", StateRole::Final);
        automaton.add_transitions([("q1", "q2", "x"), ("q2", "q1", "y")]);
        automaton
    }

    #[test]
    fn final_states_are_double_circles() {
        let dot = to_dot(&drawing());

        assert!(dot.starts_with("digraph automaton {"));
        assert!(dot.contains("    \"q1\";\n"));
        assert!(dot.contains("    \"q2\" [shape=doublecircle];\n"));
        assert!(dot.contains("    \"q1\" -> \"q2\" [label=\"x\"];\n"));
        assert!(dot.contains("    \"q2\" -> \"q1\" [label=\"y\"];\n"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn renders_complete_document() {
        let mut automaton = drawing();
        automaton.add_state("q1", StateRole::Initial);

        let expected = concat!(
            "digraph automaton {\n",
            "    rankdir=LR;\n",
            "    node [shape=circle];\n",
            "    __start [shape=point];\n",
            "    __start -> \"q1\";\n",
            "    \"q1\";\n",
            "    \"q2\" [shape=doublecircle];\n",
            "    \"q1\" -> \"q2\" [label=\"x\"];\n",
            "    \"q2\" -> \"q1\" [label=\"y\"];\n",
            "}\n",
        );
        assert_eq!(to_dot(&automaton), expected);
    }

    #[test]
    fn start_arrow_only_with_initial_state() {
        assert!(!to_dot(&drawing()).contains("__start"));

        let mut automaton = drawing();
        automaton.add_state("q1", StateRole::Initial);
        assert!(to_dot(&automaton).contains("    __start -> \"q1\";\n"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut automaton = Automaton::new();
        automaton.add_transition("a", "b", "say \"hi\"");

        assert!(to_dot(&automaton).contains(r#"[label="say \"hi\""]"#));
    }

    #[test]
    fn write_dot_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");

        write_dot(&drawing(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_dot(&drawing()));
    }

    #[test]
    fn write_dot_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.dot");

        let err = write_dot(&drawing(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
