use std::path::{Path, PathBuf};

/// Parent of `path`, with the same fixed points as POSIX `dirname`:
/// a filesystem root maps to itself and a relative path bottoms out at `.`.
pub fn dirname(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::from(".");
    }

    match path.parent() {
        // `/`, `C:\` and friends have no parent
        None => path.to_path_buf(),
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
    }
}

pub fn join(base: &Path, segment: &str) -> PathBuf {
    base.join(segment)
}
