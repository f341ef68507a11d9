use std::path::PathBuf;

use thiserror::Error;

/// Why a root search came back empty-handed.
#[derive(Debug, Error)]
pub enum FindRootError<E> {
    /// The walk reached the filesystem root without seeing the marker.
    #[error("no {marker:?} found in {start:?} or any of its parent directories")]
    RootNotFound { start: PathBuf, marker: String },

    /// The oracle failed to answer a probe; the walk stopped there.
    #[error("failed to check whether {path:?} exists")]
    OracleFailure {
        path: PathBuf,
        #[source]
        source: E,
    },
}

impl<E> FindRootError<E> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FindRootError::RootNotFound { .. })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("marker name must not be empty")]
    EmptyMarker,

    #[error("marker {0:?} must be a single path segment")]
    NotASegment(String),
}
