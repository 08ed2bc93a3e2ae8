//! Platform-specific helpers.
//! This module hides OS differences behind a uniform API so the directory
//! operations can remain platform-agnostic.
//!
//! The mode-setting strategy for new directories is fixed per target at compile time:
//! - Linux honours the mode passed to mkdir, so it is applied atomically at creation.
//! - Other targets create the directory first and then chmod it best-effort, with any
//!   chmod failure suppressed.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::suppress::{report_io_failure, SuppressGuard};

#[cfg(unix)]
mod common_unix;
#[cfg(target_os = "linux")]
mod linux;
#[cfg(all(unix, not(target_os = "linux")))]
mod other_unix;
#[cfg(not(unix))]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;
#[cfg(all(unix, not(target_os = "linux")))]
use other_unix as imp;
#[cfg(not(unix))]
use windows as imp;

pub use imp::{path_is_writable, set_mode};

/// How a requested mode is applied to a freshly created directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeStrategy {
    /// The creation call takes the mode directly.
    AtCreate,
    /// Create without a mode, then chmod best-effort.
    CreateThenChmod,
}

/// Strategy selected for the current build target.
pub const MODE_STRATEGY: ModeStrategy = imp::MODE_STRATEGY;

/// Create a single directory level, applying `mode` per `MODE_STRATEGY`.
pub fn create_dir_with_mode(path: &Path, mode: Option<u32>) -> io::Result<()> {
    match MODE_STRATEGY {
        ModeStrategy::AtCreate => imp::create_dir_at_mode(path, mode),
        ModeStrategy::CreateThenChmod => create_then_chmod(path, mode, set_mode),
    }
}

/// Create `path` without a mode, then apply `mode` through `chmod` with failures suppressed.
/// Only the creation result is returned.
pub(crate) fn create_then_chmod<F>(path: &Path, mode: Option<u32>, chmod: F) -> io::Result<()>
where
    F: FnOnce(&Path, u32) -> io::Result<()>,
{
    fs::create_dir(path)?;
    if let Some(m) = mode {
        let _quiet = SuppressGuard::new();
        match chmod(path, m) {
            Ok(()) => debug!(path = %path.display(), mode = %format!("{m:o}"), "chmod applied"),
            Err(e) => report_io_failure("chmod", path, &e),
        }
    }
    Ok(())
}
