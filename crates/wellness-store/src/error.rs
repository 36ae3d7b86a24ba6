//! Error types for the check-in store.

use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

/// The persisted log could not be turned into a [`CheckInLog`](crate::CheckInLog).
///
/// Loading recovers from this with an empty log; it is only surfaced as a
/// diagnostic.
#[derive(Debug, Error)]
pub enum MalformedLogError {
    #[error("failed to parse check-in log {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read check-in log {path}: {source}")]
    Unreadable { path: Utf8PathBuf, source: io::Error },
}

impl MalformedLogError {
    /// True when the file exists but its bytes could not be read at all.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }
}

/// An append could not be made durable.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: Utf8PathBuf, source: io::Error },

    #[error("failed to lock {path}: {source}")]
    Lock { path: Utf8PathBuf, source: io::Error },

    #[error("refusing to replace a log that cannot be read: {0}")]
    Unreadable(#[source] MalformedLogError),

    #[error("failed to move corrupt log {path} to {backup}: {source}")]
    Quarantine {
        path: Utf8PathBuf,
        backup: Utf8PathBuf,
        source: io::Error,
    },

    #[error("failed to serialize check-in log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write { path: Utf8PathBuf, source: io::Error },

    #[error("failed to replace {path}: {source}")]
    Persist { path: Utf8PathBuf, source: io::Error },
}

/// A check-in entry falls outside the check-in guidance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mood must not be empty")]
    EmptyMood,

    #[error("energy must not be empty")]
    EmptyEnergy,

    #[error("expected 1 to 3 objectives, got {0}")]
    ObjectiveCount(usize),

    #[error("objective {index} is blank")]
    BlankObjective { index: usize },
}

/// Failure of the `save_checkin` tool.
#[derive(Debug, Error)]
pub enum CheckInError {
    #[error("invalid check-in: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
