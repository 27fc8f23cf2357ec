use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Arena errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("node {id} does not exist (arena holds {len} nodes)")]
    UnknownNode { id: usize, len: usize },
}

impl ArenaError {
    pub fn unknown_node(id: usize, len: usize) -> Self {
        Self::UnknownNode { id, len }
    }
}

// =============================================================================
// Demo configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
