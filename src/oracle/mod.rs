use std::future::Future;
use std::path::{Path, PathBuf};

use crate::utils;

pub mod disk;
pub mod memory;

pub use disk::DiskOracle;
pub use memory::{MemoryOracle, MemoryOracleError};

/// The storage capability a root search runs against.
///
/// Only `exists` touches the backing medium. `join` and `dirname` are pure and
/// default to the platform path rules; `dirname` must map a filesystem root to
/// itself, since that fixed point is what ends an unsuccessful walk.
pub trait FsOracle: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether `path` names an existing entry of any kind.
    fn exists(&self, path: &Path) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    fn join(&self, base: &Path, segment: &str) -> PathBuf {
        utils::join(base, segment)
    }

    fn dirname(&self, path: &Path) -> PathBuf {
        utils::dirname(path)
    }
}

impl<O: FsOracle> FsOracle for &O {
    type Error = O::Error;

    fn exists(&self, path: &Path) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        (**self).exists(path)
    }

    fn join(&self, base: &Path, segment: &str) -> PathBuf {
        (**self).join(base, segment)
    }

    fn dirname(&self, path: &Path) -> PathBuf {
        (**self).dirname(path)
    }
}
