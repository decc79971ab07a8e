//! Error types for roster loading, rendering and writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing the TSC/Board members list.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML roster '{path}': {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse JSON roster '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported roster format '{path}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to serialize merged roster: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write roster '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
impl RosterError {
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::ParseYaml { .. } | Self::ParseJson { .. } | Self::UnsupportedFormat { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
