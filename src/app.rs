//! Application orchestrator.
//! Loads/merges config, initializes logging, and dispatches the chosen subcommand to
//! the library. Library status values are turned into exit codes and typed errors here.

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info};

use folder_ops::cli::{Args, Command};
use folder_ops::config::{default_config_path, load_config, CONFIG_ENV};
use folder_ops::errors::parse_mode;
use folder_ops::output as out;
use folder_ops::{
    compile_pattern, delete_folder, is_writable, list_files, make_directory, Config, FolderError,
    ListOptions,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }

    let mut cfg = load_config().inspect_err(|e| out::print_error(&format!("{e:#}")))?;
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    let Some(command) = args.command else {
        out::print_error("no command given; see --help");
        return Ok(ExitCode::from(2));
    };

    debug!(?command, "starting folder_ops");
    match execute(&cfg, command) {
        Ok(code) => Ok(code),
        Err(e) => {
            error!(code = e.code(), kind = e.kind(), "{e}");
            Err(e.into())
        }
    }
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}\n"));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default folder_ops config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults are used.");
            }
        }
        None => out::print_warn("Could not determine a default config path."),
    }
}

/// Execute one subcommand against the library.
pub fn execute(cfg: &Config, command: Command) -> Result<ExitCode, FolderError> {
    match command {
        Command::Mkdir { path, mode } => {
            let mode = match mode {
                Some(m) => Some(parse_mode(&m)?),
                None => cfg.default_mode,
            };
            if !make_directory(&path, mode) {
                return Err(FolderError::CreateFailed(path));
            }
            info!(path = %path.display(), "Directory ready");
            out::print_success(&format!("directory ready: {}", path.display()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Rm { path } => {
            let deleted = delete_folder(&path);
            out::print_user(&deleted.to_string());
            if still_exists(&path) {
                return Err(FolderError::DeleteIncomplete { path, deleted });
            }
            info!(path = %path.display(), deleted, "Deleted");
            Ok(ExitCode::SUCCESS)
        }
        Command::Writable { path } => {
            if is_writable(&path) {
                out::print_user("writable");
                Ok(ExitCode::SUCCESS)
            } else {
                out::print_user("not writable");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Ls {
            path,
            include_folders,
            pattern,
            sort,
        } => {
            let mut opts = ListOptions::default();
            if include_folders {
                opts = opts.include_folders();
            }
            if let Some(p) = pattern.as_deref() {
                opts = opts.with_pattern(compile_pattern(p)?);
            }
            let mut entries = list_files(&path, &opts);
            if sort {
                entries.sort();
            }
            for entry in &entries {
                out::print_user(entry);
            }
            debug!(path = %path.display(), count = entries.len(), "Listed");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn still_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn mkdir_uses_config_mode_and_reports_failure() {
        let td = tempdir().unwrap();
        let cfg = Config {
            default_mode: Some(0o700),
            ..Config::default()
        };
        let target = td.path().join("a/b");
        execute(&cfg, Command::Mkdir { path: target.clone(), mode: None }).unwrap();
        assert!(target.is_dir());

        fs::write(td.path().join("file"), b"x").unwrap();
        let err = execute(
            &cfg,
            Command::Mkdir { path: td.path().join("file/sub"), mode: None },
        )
        .unwrap_err();
        assert!(matches!(err, FolderError::CreateFailed(_)));
    }

    #[test]
    fn mkdir_rejects_bad_mode() {
        let err = execute(
            &Config::default(),
            Command::Mkdir { path: PathBuf::from("x"), mode: Some("9".into()) },
        )
        .unwrap_err();
        assert!(matches!(err, FolderError::InvalidMode(_)));
    }

    #[test]
    fn ls_rejects_bad_pattern() {
        let td = tempdir().unwrap();
        let err = execute(
            &Config::default(),
            Command::Ls {
                path: td.path().to_path_buf(),
                include_folders: false,
                pattern: Some("(".into()),
                sort: false,
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), "invalid_pattern");
    }

    #[test]
    fn rm_removes_tree() {
        let td = tempdir().unwrap();
        let root = td.path().join("r");
        fs::create_dir_all(root.join("s")).unwrap();
        fs::write(root.join("s/f"), b"").unwrap();
        execute(&Config::default(), Command::Rm { path: root.clone() }).unwrap();
        assert!(!root.exists());
    }
}
