//! Recursive directory creation.
//!
//! Missing ancestors are created first, top-down, each with the same mode. The first
//! level that cannot be created stops the chain, and nothing below it is attempted.

use std::io;
use std::path::Path;
use tracing::debug;

use super::path::{creation_parent, strip_trailing_separators};
use crate::platform::create_dir_with_mode;
use crate::suppress::report_io_failure;

/// Ensure `path` and all of its missing ancestors exist as directories.
///
/// Returns `true` when the directory exists afterwards, including when it already
/// existed. `mode` is applied to every level this call creates; `None` leaves the
/// platform default. Whether a best-effort mode was actually applied is not reported.
pub fn make_directory<P: AsRef<Path>>(path: P, mode: Option<u32>) -> bool {
    let path = strip_trailing_separators(path.as_ref());
    make_level(&path, mode)
}

fn make_level(path: &Path, mode: Option<u32>) -> bool {
    if path.is_dir() {
        return true;
    }

    if let Some(parent) = creation_parent(path)
        && !make_level(&parent, mode)
    {
        debug!(path = %path.display(), parent = %parent.display(), "parent unavailable; not creating");
        return false;
    }

    settle(path, create_dir_with_mode(path, mode))
}

/// Outcome of one creation attempt.
fn settle(path: &Path, attempt: io::Result<()>) -> bool {
    match attempt {
        Ok(()) => {
            debug!(path = %path.display(), "created directory");
            true
        }
        // Another creator got there first.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            debug!(path = %path.display(), "directory appeared concurrently");
            true
        }
        Err(e) => {
            report_io_failure("create directory", path, &e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lost_race_counts_as_success() {
        let td = tempdir().unwrap();
        let dir = td.path().join("raced");
        fs::create_dir(&dir).unwrap();
        let attempt = fs::create_dir(&dir);
        assert_eq!(attempt.as_ref().unwrap_err().kind(), io::ErrorKind::AlreadyExists);
        assert!(settle(&dir, attempt));
    }

    #[test]
    fn existing_file_is_not_a_won_race() {
        let td = tempdir().unwrap();
        let file = td.path().join("taken");
        fs::write(&file, b"x").unwrap();
        let attempt = fs::create_dir(&file);
        assert!(!settle(&file, attempt));
    }

    #[test]
    fn creates_all_missing_levels() {
        let td = tempdir().unwrap();
        let leaf = td.path().join("a").join("b").join("c");
        assert!(make_directory(&leaf, None));
        assert!(td.path().join("a").is_dir());
        assert!(td.path().join("a/b").is_dir());
        assert!(leaf.is_dir());
    }

    #[test]
    fn existing_directory_is_success() {
        let td = tempdir().unwrap();
        assert!(make_directory(td.path(), None));
        assert!(make_directory(td.path(), Some(0o700)));
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let td = tempdir().unwrap();
        let raw = format!("{}/x/y/", td.path().display());
        assert!(make_directory(&raw, None));
        assert!(td.path().join("x/y").is_dir());
    }

    #[test]
    fn file_in_the_way_fails_and_stops_descent() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("a")).unwrap();
        fs::write(td.path().join("a/b"), b"not a dir").unwrap();
        assert!(!make_directory(td.path().join("a/b/c"), None));
        assert!(td.path().join("a/b").is_file());
    }

    #[test]
    fn existing_file_at_target_fails() {
        let td = tempdir().unwrap();
        let f = td.path().join("f");
        fs::write(&f, b"x").unwrap();
        assert!(!make_directory(&f, None));
    }

    #[test]
    fn empty_path_fails() {
        assert!(!make_directory("", None));
    }

    #[cfg(unix)]
    #[test]
    fn mode_applies_to_each_created_level() {
        use std::os::unix::fs::PermissionsExt;
        let td = tempdir().unwrap();
        let leaf = td.path().join("p").join("q");
        assert!(make_directory(&leaf, Some(0o700)));
        for dir in [td.path().join("p"), leaf] {
            let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o700, "mode of {}", dir.display());
        }
    }
}
