//! Core library for `folder_ops`.
//!
//! Four independent directory operations over the live filesystem:
//! - [`make_directory`]: create a directory and its missing ancestors,
//! - [`delete_folder`]: delete a tree and count the files removed,
//! - [`is_writable`]: writability of a directory path,
//! - [`list_files_in_folder`] / [`list_files`]: recursive listing with a name filter.
//!
//! Operations report plain status values (bool, count, list). Failures of individual
//! filesystem calls are logged through `tracing` and never panic.
//!
//! ```no_run
//! use folder_ops::{compile_pattern, delete_folder, list_files, make_directory, ListOptions};
//!
//! assert!(make_directory("/tmp/folder_ops_demo/a/b", Some(0o755)));
//! let logs = ListOptions::default().with_pattern(compile_pattern(r"/\.log$/i").unwrap());
//! for rel in list_files("/tmp/folder_ops_demo", &logs) {
//!     println!("{rel}");
//! }
//! let removed = delete_folder("/tmp/folder_ops_demo");
//! println!("removed {removed} files");
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod folder;
pub mod output;
pub mod pattern;
pub mod platform;
pub mod suppress;

pub use config::{default_config_path, Config, LogLevel};
pub use errors::FolderError;
pub use folder::{
    delete_folder, is_writable, list_files, list_files_in_folder, make_directory, ListOptions,
};
pub use pattern::compile_pattern;
pub use suppress::SuppressGuard;
