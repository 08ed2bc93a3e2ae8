//! macOS and other non-Linux Unix implementations of platform helpers.
//! Split from the Linux module: mode bits on mkdir are not trusted here, so the
//! directory is created plain and chmod'ed afterwards.

use super::ModeStrategy;

pub use super::common_unix::{create_dir_at_mode, path_is_writable, set_mode};

pub const MODE_STRATEGY: ModeStrategy = ModeStrategy::CreateThenChmod;
