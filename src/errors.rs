//! Typed error definitions for folder_ops.
//! The library operations report plain status values; these variants exist so the
//! CLI can turn those statuses into well-known failure modes for logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolderError {
    #[error("Failed to create directory: {0}")]
    CreateFailed(PathBuf),

    #[error("Deletion of {path} incomplete: {deleted} entries removed, path still exists")]
    DeleteIncomplete { path: PathBuf, deleted: usize },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid mode '{0}': expected an octal value such as 0755")]
    InvalidMode(String),

    #[error("Config error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl FolderError {
    /// Stable numeric code, logged as a structured field.
    pub fn code(&self) -> u16 {
        match self {
            FolderError::CreateFailed(_) => 10,
            FolderError::DeleteIncomplete { .. } => 20,
            FolderError::InvalidPattern { .. } => 40,
            FolderError::InvalidMode(_) => 41,
            FolderError::Config { .. } => 50,
        }
    }

    /// Short machine-friendly kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            FolderError::CreateFailed(_) => "create_failed",
            FolderError::DeleteIncomplete { .. } => "delete_incomplete",
            FolderError::InvalidPattern { .. } => "invalid_pattern",
            FolderError::InvalidMode(_) => "invalid_mode",
            FolderError::Config { .. } => "config",
        }
    }
}

/// Parse a permission mode written in octal (`755`, `0755`, `0o755`).
pub fn parse_mode(s: &str) -> Result<u32, FolderError> {
    let t = s.trim();
    let digits = t
        .strip_prefix("0o")
        .or_else(|| t.strip_prefix("0O"))
        .unwrap_or(t);
    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
        return Err(FolderError::InvalidMode(s.to_string()));
    }
    match u32::from_str_radix(digits, 8) {
        Ok(m) if m <= 0o7777 => Ok(m),
        _ => Err(FolderError::InvalidMode(s.to_string())),
    }
}
