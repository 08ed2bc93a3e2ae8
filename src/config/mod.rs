//! Config module.
//! Provides configuration types, the default config path, and XML loading.
//! The library operations never read config; only the CLI does.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, CONFIG_ENV};
pub use types::{Config, LogLevel};
pub use xml::{load_config, load_config_from_xml_path};
