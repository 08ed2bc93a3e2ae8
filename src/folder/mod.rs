//! Directory operations: modularized.
//!
//! Four independent, synchronous operations over the live filesystem. None of them
//! holds state between calls, and none assumes the tree stays unchanged during a call.

mod create;
mod delete;
mod list;
pub mod path;
mod writable;

pub use create::make_directory;
pub use delete::delete_folder;
pub use list::{list_files, list_files_in_folder, ListOptions};
pub use writable::is_writable;
