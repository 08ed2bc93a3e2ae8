//! Windows implementations of platform helpers (best-effort).
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; the only bit that maps is the owner write
//!   bit, which toggles the READONLY attribute.
//! - Writability is judged from that attribute; ACLs are not inspected.

use std::fs;
use std::io;
use std::path::Path;

use super::ModeStrategy;

pub const MODE_STRATEGY: ModeStrategy = ModeStrategy::CreateThenChmod;

/// No mode support at creation; the mode is ignored.
pub fn create_dir_at_mode(path: &Path, _mode: Option<u32>) -> io::Result<()> {
    fs::create_dir(path)
}

/// Map the owner write bit onto the READONLY attribute.
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, perms)
}

/// Path exists and is not READONLY.
pub fn path_is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
