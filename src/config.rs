//! Fixture configuration.
//!
//! Settings are read from a small TOML file. Every field is optional and a
//! missing file simply means defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "JAR_FIXTURES_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Name prefix for the per-test working directory.
    pub workdir_prefix: String,
    /// Leave the working directory on disk when the fixture is dropped.
    pub keep_workdir: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            workdir_prefix: "jar_task_test.".to_string(),
            keep_workdir: false,
            log_filter: None,
        }
    }
}

impl FixtureConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `$JAR_FIXTURES_CONFIG` if set, else from `fixtures.toml` in
    /// the project config directory if present, else return defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&p));
        }
        match default_config_path() {
            Some(p) if p.is_file() => Self::load_from(&p),
            _ => Ok(Self::default()),
        }
    }
}

/// `fixtures.toml` under the platform config dir for this project.
pub fn default_config_path() -> Option<PathBuf> {
    directories_next::ProjectDirs::from("org", "jar-task-fixtures", "jar-task-fixtures")
        .map(|dirs| dirs.config_dir().join("fixtures.toml"))
}
