//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - CLI flags override config values (which are loaded from XML if present).

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// CLI wrapper for the folder_ops library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Recursive mkdir, delete, listing and writability checks"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where folder_ops will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by folder_ops and exit")]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a directory and any missing parents.
    Mkdir {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
        /// Octal permission mode for created directories (e.g. 0755).
        #[arg(long, short = 'm')]
        mode: Option<String>,
    },
    /// Delete a directory tree (or a single file) and report how many files were removed.
    Rm {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// Report whether a path is writable; exits 1 when it is not.
    Writable {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// List files beneath a directory, relative to it.
    Ls {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
        /// Include directory names in the output.
        #[arg(long)]
        include_folders: bool,
        /// Regular expression names must match (bare, or delimited like /\.log$/i).
        #[arg(long, short = 'p')]
        pattern: Option<String>,
        /// Sort the output instead of using directory order.
        #[arg(long)]
        sort: bool,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
