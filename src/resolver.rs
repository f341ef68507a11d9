use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::error::FindRootError;
use crate::oracle::{DiskOracle, FsOracle};

/// Walks up from a starting path to the nearest directory holding the marker.
///
/// One probe is made per candidate, deepest first, and the walk stops at the
/// first hit. A failed probe ends the walk immediately. Reaching a candidate
/// that is its own parent without a hit yields
/// [`FindRootError::RootNotFound`].
///
/// The resolver keeps no state between calls, so one instance can serve any
/// number of concurrent searches.
#[derive(Debug, Clone)]
pub struct RootResolver<O> {
    oracle: O,
    config: ResolverConfig,
}

impl<O: FsOracle> RootResolver<O> {
    pub fn new(oracle: O, config: ResolverConfig) -> Self {
        Self { oracle, config }
    }

    pub fn with_default_marker(oracle: O) -> Self {
        Self::new(oracle, ResolverConfig::default())
    }

    pub fn marker(&self) -> &str {
        self.config.marker()
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub async fn find_root(&self, start: &Path) -> Result<PathBuf, FindRootError<O::Error>> {
        let mut candidate = start.to_path_buf();

        loop {
            if self.contains_marker(&candidate).await? {
                info!(root = %candidate.display(), "found {}", self.marker());
                return Ok(candidate);
            }

            let parent = self.oracle.dirname(&candidate);
            if parent == candidate {
                debug!(start = %start.display(), "reached filesystem root");
                return Err(FindRootError::RootNotFound {
                    start: start.to_path_buf(),
                    marker: self.marker().to_string(),
                });
            }

            candidate = parent;
        }
    }

    /// Like [`RootResolver::find_root`], but a missing root is `None` rather
    /// than an error. Probe failures still propagate.
    pub async fn find_root_opt(
        &self,
        start: &Path,
    ) -> Result<Option<PathBuf>, FindRootError<O::Error>> {
        match self.find_root(start).await {
            Ok(root) => Ok(Some(root)),
            Err(FindRootError::RootNotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn contains_marker(&self, candidate: &Path) -> Result<bool, FindRootError<O::Error>> {
        let probe = self.oracle.join(candidate, self.marker());
        debug!(probe = %probe.display(), "probing");

        self.oracle
            .exists(&probe)
            .await
            .map_err(|source| FindRootError::OracleFailure {
                path: probe,
                source,
            })
    }

    /// Every candidate a fruitless walk from `start` would visit, in order,
    /// ending at the fixed point of `dirname`. Touches no storage.
    pub fn candidates(&self, start: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![start.to_path_buf()];

        loop {
            let Some(current) = candidates.last() else {
                break;
            };
            let parent = self.oracle.dirname(current);
            if &parent == current {
                break;
            }
            candidates.push(parent);
        }

        candidates
    }
}

/// Finds the enclosing `.git` root of `start` on the local disk.
pub async fn find_root(start: impl AsRef<Path>) -> Result<PathBuf, FindRootError<io::Error>> {
    RootResolver::with_default_marker(DiskOracle)
        .find_root(start.as_ref())
        .await
}
