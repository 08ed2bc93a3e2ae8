//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file means defaults; a malformed one or an unknown field is an error.
//!
//! ```xml
//! <config>
//!   <log_level>normal</log_level>
//!   <log_file>/path/to/folder_ops.log</log_file>
//!   <default_mode>0755</default_mode>
//! </config>
//! ```

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use crate::errors::{parse_mode, FolderError};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "default_mode")]
    default_mode: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn xml_to_config(parsed: XmlConfig, path: &Path) -> Result<Config, FolderError> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = LogLevel::parse(s).ok_or_else(|| FolderError::Config {
            path: path.to_path_buf(),
            reason: format!("invalid log_level '{s}'"),
        })?;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.default_mode.as_deref()) {
        cfg.default_mode = Some(parse_mode(s).map_err(|e| FolderError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?);
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed, path)?)
}

/// Load the config from `default_config_path()`.
/// Returns the defaults when no path can be determined or the file does not exist.
pub fn load_config() -> Result<Config> {
    let Some(path) = default_config_path() else {
        debug!("no config location available; using defaults");
        return Ok(Config::default());
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    debug!(path = %path.display(), "loading config");
    load_config_from_xml_path(&path)
}
