//! Configuration file resolution.
//!
//! Lookup order: `--config PATH`, then the `ECS2WINCC_CONFIG` environment
//! variable, then `ecs2wincc.toml` in the working directory, then defaults.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use wincc_model::ConverterConfig;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "ECS2WINCC_CONFIG";

/// Environment variable overriding the template directory.
pub const TEMPLATES_ENV_VAR: &str = "ECS2WINCC_TEMPLATES_DIR";

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ecs2wincc.toml";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or the environment variable; the file must exist.
    Explicit(PathBuf),
    /// `ecs2wincc.toml` found in the working directory.
    WorkingDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::WorkingDir(path) => Some(path),
            Self::Defaults => None,
        }
    }
}

/// Pick the configuration source without reading it.
pub fn resolve_config_source(
    flag: Option<&Path>,
    env_value: Option<OsString>,
    working_dir: &Path,
) -> ConfigSource {
    if let Some(path) = flag {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(value));
    }
    let implicit = working_dir.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        ConfigSource::WorkingDir(implicit)
    } else {
        ConfigSource::Defaults
    }
}

/// Parse one configuration file.
pub fn read_config(path: &Path) -> Result<ConverterConfig> {
    if !path.is_file() {
        bail!("configuration file not found: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse configuration {}", path.display()))
}

/// Load the configuration for `source`.
pub fn load_config(source: &ConfigSource) -> Result<ConverterConfig> {
    match source.path() {
        Some(path) => {
            let config = read_config(path)?;
            info!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        None => {
            debug!("no configuration file, using defaults");
            Ok(ConverterConfig::default())
        }
    }
}

/// Apply the template directory override; the flag wins over the environment.
pub fn apply_templates_dir(
    config: &mut ConverterConfig,
    flag: Option<&Path>,
    env_value: Option<OsString>,
) {
    let dir = flag
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|value| !value.is_empty()).map(PathBuf::from));
    if let Some(dir) = dir {
        debug!(path = %dir.display(), "template directory override");
        config.templates.dir = dir;
    }
}
