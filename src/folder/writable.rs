use std::path::Path;

use super::path::with_trailing_separator;
use crate::platform::path_is_writable;

/// Whether `path` is writable, checked as a directory (a separator is appended first).
pub fn is_writable<P: AsRef<Path>>(path: P) -> bool {
    let path = with_trailing_separator(path.as_ref());
    if path.as_os_str().is_empty() {
        return false;
    }
    path_is_writable(&path)
}
