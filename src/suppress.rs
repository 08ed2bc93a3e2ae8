//! Scoped error-reporting policy.
//! Failures of filesystem calls are normally logged at `warn` with an OS-aware hint.
//! While a `SuppressGuard` is alive on the current thread they are only traced and
//! otherwise discarded; used around best-effort steps such as post-create chmod.
//!
//! Notes:
//! - The policy is thread-local so concurrent callers never hide each other's failures.
//! - Guards nest; dropping one restores whatever policy was active when it was created,
//!   including during unwinding.

use std::cell::Cell;
use std::io;
use std::path::Path;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    Report,
    Suppress,
}

thread_local! {
    static POLICY: Cell<Policy> = const { Cell::new(Policy::Report) };
}

/// RAII guard: suppresses failure reporting until dropped.
#[must_use = "suppression ends as soon as the guard is dropped"]
pub struct SuppressGuard {
    previous: Policy,
}

impl SuppressGuard {
    /// Begin suppressing failure reports on this thread.
    pub fn new() -> Self {
        let previous = POLICY.with(|p| p.replace(Policy::Suppress));
        Self { previous }
    }
}

impl Default for SuppressGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SuppressGuard {
    fn drop(&mut self) {
        POLICY.with(|p| p.set(self.previous));
    }
}

/// Whether failure reports are currently suppressed on this thread.
#[inline]
pub fn is_suppressed() -> bool {
    POLICY.with(|p| p.get() == Policy::Suppress)
}

/// Report a failed filesystem call according to the active policy.
pub fn report_io_failure(op: &str, path: &Path, e: &io::Error) {
    if is_suppressed() {
        trace!(op, path = %path.display(), error = %e, "suppressed failure");
    } else {
        warn!(op, path = %path.display(), "{}", build_message(op, path, e));
    }
}

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" (permission denied; check ownership and mode bits of the parent)");
                }
                libc::ENOENT => msg.push_str(" (path not found; a parent may be missing)"),
                libc::EEXIST => msg.push_str(" (already exists)"),
                libc::ENOTDIR => msg.push_str(" (a path component is not a directory)"),
                libc::EISDIR => msg.push_str(" (is a directory)"),
                libc::ENOTEMPTY => {
                    msg.push_str(" (directory not empty; some entries could not be removed)")
                }
                libc::EROFS => msg.push_str(" (read-only filesystem)"),
                libc::ENOSPC => msg.push_str(" (no space left on device)"),
                libc::ELOOP => msg.push_str(" (too many symbolic link levels)"),
                libc::ENAMETOOLONG => msg.push_str(" (name too long)"),
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" (access denied)"),      // ERROR_ACCESS_DENIED
                2 | 3 => msg.push_str(" (path not found)"), // FILE / PATH NOT FOUND
                32 => msg.push_str(" (in use by another process)"), // ERROR_SHARING_VIOLATION
                145 => msg.push_str(" (directory not empty)"), // ERROR_DIR_NOT_EMPTY
                183 => msg.push_str(" (already exists)"),   // ERROR_ALREADY_EXISTS
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => msg.push_str(" (permission denied)"),
            io::ErrorKind::NotFound => msg.push_str(" (path not found)"),
            io::ErrorKind::AlreadyExists => msg.push_str(" (already exists)"),
            _ => {}
        }
    }

    msg
}
