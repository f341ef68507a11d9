//! findroot
//!
//! Locates the root of a working tree by walking up from any path inside it
//! until a directory containing the marker (`.git` unless configured
//! otherwise) turns up.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let root = findroot::find_root("/path/to/repo/src/lib.rs").await?;
//! assert_eq!(root, std::path::PathBuf::from("/path/to/repo"));
//! # Ok(())
//! # }
//! ```
//!
//! Storage is abstracted behind [`FsOracle`]: [`DiskOracle`] for the local
//! filesystem and [`MemoryOracle`] for anything held in memory.

pub mod config;
pub mod error;
pub mod oracle;
pub mod resolver;
pub mod utils;

pub use config::{DEFAULT_MARKER, ResolverConfig};
pub use error::{ConfigError, FindRootError};
pub use oracle::{DiskOracle, FsOracle, MemoryOracle, MemoryOracleError};
pub use resolver::{RootResolver, find_root};
