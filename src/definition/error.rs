//! Definition error types.

use crate::automaton::AutomatonError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or building a definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Definition version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Definition file could not be read
    #[error("Failed to read definition file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The described graph was rejected by the automaton
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
