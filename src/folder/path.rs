//! Path normalization shared by the directory operations.

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Drop trailing separators (and duplicate separators) while keeping a bare root intact.
/// `"a/b/"` -> `"a/b"`, `"/"` -> `"/"`, `""` -> `""`.
pub fn strip_trailing_separators(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Ensure the path ends with a separator; an empty path stays empty.
pub fn with_trailing_separator(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    if raw.is_empty() || ends_with_separator(path) {
        return path.to_path_buf();
    }
    let mut s = OsString::from(raw);
    s.push(MAIN_SEPARATOR_STR);
    PathBuf::from(s)
}

fn ends_with_separator(path: &Path) -> bool {
    match path.as_os_str().as_encoded_bytes().last() {
        Some(b'/') => true,
        #[cfg(windows)]
        Some(b'\\') => true,
        _ => false,
    }
}

/// Parent to create before `path`.
/// `None` at the filesystem root; a bare relative name hangs off the current directory.
pub fn creation_parent(path: &Path) -> Option<PathBuf> {
    match path.parent() {
        None => None,
        Some(p) if p.as_os_str().is_empty() => {
            (path != Path::new(".")).then(|| PathBuf::from("."))
        }
        Some(p) => Some(p.to_path_buf()),
    }
}

/// Relative listing entry: `prefix/name` with `/` regardless of platform.
pub fn join_relative(prefix: &str, name: &str) -> String {
    format!("{prefix}/{name}")
}
