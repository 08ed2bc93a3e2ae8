//! Recursive listing with an optional name filter.
//!
//! Traversal and filtering are separate: every subdirectory is descended into and its
//! contents are always part of the result, while `skip_folders` and the pattern only
//! decide whether each top-level child's own name is emitted.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::path::{join_relative, strip_trailing_separators};

/// Options for [`list_files`].
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Leave directory names out of the result (their contents are still listed).
    pub skip_folders: bool,
    /// Only emit top-level names matching this expression.
    pub pattern: Option<Regex>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            skip_folders: true,
            pattern: None,
        }
    }
}

impl ListOptions {
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn include_folders(mut self) -> Self {
        self.skip_folders = false;
        self
    }
}

/// [`list_files_in_folder`] driven by a [`ListOptions`].
pub fn list_files<P: AsRef<Path>>(path: P, opts: &ListOptions) -> Vec<String> {
    list_files_in_folder(path, opts.skip_folders, opts.pattern.as_ref())
}

/// List everything under `path`, as paths relative to it joined with `/`.
///
/// - Contents of subdirectories are listed recursively and always included, as files
///   only (nested directory names are not emitted) and without the pattern applied.
/// - A top-level child's own name is included when it is not a directory or
///   `skip_folders` is false, and, if `pattern` is given, only when it matches.
///
/// The order follows directory enumeration and is not sorted. A directory that cannot
/// be read yields an empty list.
pub fn list_files_in_folder<P: AsRef<Path>>(
    path: P,
    skip_folders: bool,
    pattern: Option<&Regex>,
) -> Vec<String> {
    let root = strip_trailing_separators(path.as_ref());
    let mut result = Vec::new();

    for child in read_children(&root) {
        if child.is_dir {
            for nested in list_files_in_folder(&child.path, true, None) {
                result.push(join_relative(&child.name, &nested));
            }
        }

        if (!skip_folders || !child.is_dir) && pattern.is_none_or(|re| re.is_match(&child.name)) {
            result.push(child.name);
        }
    }

    result
}

struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Immediate children of `dir`, in enumeration order. Unreadable -> empty.
fn read_children(dir: &Path) -> Vec<Child> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot read directory; listing it as empty");
            return Vec::new();
        }
    };

    let mut children = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == "." || name == ".." {
            continue;
        }
        // file_type() does not follow symlinks, so linked directories are leaves.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        children.push(Child {
            name,
            path: entry.path(),
            is_dir,
        });
    }
    children
}
