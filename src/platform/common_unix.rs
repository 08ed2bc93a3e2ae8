//! Common Unix helpers shared by Linux and other Unix targets.
//! Includes mode-aware mkdir, chmod, and the access(2)-based writability predicate.

use std::ffi::CString;
use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::Path;

/// mkdir(2) with an explicit mode; `None` keeps the platform default (0777 & !umask).
pub fn create_dir_at_mode(path: &Path, mode: Option<u32>) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    if let Some(m) = mode {
        builder.mode(m);
    }
    builder.create(path)
}

/// POSIX chmod.
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

/// access(2) with W_OK for the real uid/gid.
/// The path is passed through untouched, so a trailing `/` on a non-directory fails (ENOTDIR).
pub fn path_is_writable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}
