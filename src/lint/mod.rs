//! Structural lint for automaton graphs.
//!
//! Construction keeps last-write-wins semantics and never refuses a graph
//! for being incomplete. Callers that want stricter guarantees run a lint
//! pass after building. Lint uses stillwater's `Validation` so that every
//! problem is reported at once instead of one per run.
//!
//! # Example
//!
//! ```rust
//! use tl_automaton::builder::sequence_task;
//! use tl_automaton::lint::{LintBuilder, LintRules};
//!
//! let automaton = sequence_task(["g1", "g2"]).unwrap();
//! assert!(LintRules::standard().check(&automaton).is_success());
//!
//! let strict = LintBuilder::new()
//!     .require_final_reachable()
//!     .forbid_dead_ends()
//!     .require_pred(|a| a.alphabet().len() <= 8, "Alphabet too large".to_string())
//!     .build();
//! assert!(strict.check(&automaton).is_success());
//! ```
//!
//! Linting reads the graph only; it never runs as part of `step`.

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::LintBuilder;
pub use rules::{LintCheck, LintRules};
pub use violations::LintViolation;
