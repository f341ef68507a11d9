use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::FsOracle;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryOracleError {
    #[error("injected failure probing {path:?}: {message}")]
    Injected { path: PathBuf, message: String },
}

/// An in-memory backing store.
///
/// Holds a flat set of existing paths and records every probe it answers, in
/// order, so callers can assert exactly which paths a walk touched. Probing a
/// path registered with [`MemoryOracle::fail_at`] returns an error instead of
/// an answer.
#[derive(Debug, Default)]
pub struct MemoryOracle {
    entries: Mutex<HashSet<PathBuf>>,
    failures: Mutex<HashMap<PathBuf, String>>,
    probes: Mutex<Vec<PathBuf>>,
}

impl MemoryOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let oracle = Self::new();
        for entry in entries {
            oracle.insert(entry);
        }
        oracle
    }

    /// Adds `path` and every one of its ancestors.
    pub fn insert(&self, path: impl AsRef<Path>) -> &Self {
        let mut entries = lock(&self.entries);
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            entries.insert(ancestor.to_path_buf());
        }
        self
    }

    pub fn fail_at(&self, path: impl AsRef<Path>, message: impl Into<String>) -> &Self {
        lock(&self.failures).insert(path.as_ref().to_path_buf(), message.into());
        self
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        lock(&self.entries).contains(path.as_ref())
    }

    pub fn probes(&self) -> Vec<PathBuf> {
        lock(&self.probes).clone()
    }

    pub fn probe_count(&self) -> usize {
        lock(&self.probes).len()
    }

    pub fn clear_probes(&self) {
        lock(&self.probes).clear();
    }
}

impl FsOracle for MemoryOracle {
    type Error = MemoryOracleError;

    async fn exists(&self, path: &Path) -> Result<bool, MemoryOracleError> {
        lock(&self.probes).push(path.to_path_buf());

        if let Some(message) = lock(&self.failures).get(path) {
            return Err(MemoryOracleError::Injected {
                path: path.to_path_buf(),
                message: message.clone(),
            });
        }

        Ok(lock(&self.entries).contains(path))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
