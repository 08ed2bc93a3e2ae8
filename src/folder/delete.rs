//! Recursive directory deletion.
//!
//! Each entry is judged at its own level: a directory is emptied and removed, anything
//! else (files, symlinks, sockets) is unlinked and counted. A symlink to a directory is
//! removed as a link and never followed; on Windows such links and junctions are
//! removed with `remove_dir`. Failures are logged and never stop the walk;
//! they only lower the returned count.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::path::strip_trailing_separators;
use crate::suppress::report_io_failure;

/// Delete `path` and everything beneath it.
///
/// Returns the number of leaf entries removed. Directories themselves, including
/// `path`, are not counted. Passing a non-directory removes that single entry (count 1).
pub fn delete_folder<P: AsRef<Path>>(path: P) -> usize {
    let path = strip_trailing_separators(path.as_ref());
    delete_entry(&path)
}

fn delete_entry(path: &Path) -> usize {
    if !is_real_dir(path) {
        return match remove_leaf(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed file");
                1
            }
            Err(e) => {
                report_io_failure("remove file", path, &e);
                0
            }
        };
    }

    let mut count = 0;
    match fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries {
                match entry {
                    Ok(entry) => count += delete_entry(&entry.path()),
                    Err(e) => report_io_failure("read directory entry", path, &e),
                }
            }
        }
        Err(e) => report_io_failure("read directory", path, &e),
    }

    match fs::remove_dir(path) {
        Ok(()) => debug!(path = %path.display(), removed = count, "removed directory"),
        Err(e) => report_io_failure("remove directory", path, &e),
    }
    count
}

#[cfg(not(windows))]
fn remove_leaf(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Directory symlinks and junctions need `remove_dir` on Windows.
#[cfg(windows)]
fn remove_leaf(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if is_link(path) => fs::remove_dir(path).map_err(|_| e),
        other => other,
    }
}

#[cfg(windows)]
fn is_link(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
