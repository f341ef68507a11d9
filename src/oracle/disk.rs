use std::io::{self, ErrorKind};
use std::path::Path;

use super::FsOracle;

/// Probes the local filesystem through tokio.
///
/// A path whose parent is missing or is a regular file does not exist; any
/// other I/O error is reported as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskOracle;

impl FsOracle for DiskOracle {
    type Error = io::Error;

    async fn exists(&self, path: &Path) -> Result<bool, io::Error> {
        tokio::fs::try_exists(path).await.or_else(absent_on_missing)
    }
}

fn absent_on_missing(err: io::Error) -> Result<bool, io::Error> {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => Ok(false),
        _ => Err(err),
    }
}
