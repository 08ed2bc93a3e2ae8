//! Linux implementations of platform helpers.
//! mkdir(2) honours the mode argument here, so it is applied at creation time.

use super::ModeStrategy;

pub use super::common_unix::{create_dir_at_mode, path_is_writable, set_mode};

pub const MODE_STRATEGY: ModeStrategy = ModeStrategy::AtCreate;
