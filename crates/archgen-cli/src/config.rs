//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `ARCHGEN__` (`ARCHGEN__GENERATE__FORCE=true`)
//! 3. Config file (`--config FILE`, else the platform config dir, else `.archgen.toml`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Fallback config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".archgen.toml";

const ENV_PREFIX: &str = "ARCHGEN";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `archgen generate`.
    pub generate: GenerateConfig,
    /// Defaults for `archgen-impl`.
    pub analyze: AnalyzeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub config_file: PathBuf,
    pub output_dir: PathBuf,
    pub skip_existing: bool,
    pub backup: bool,
    pub force: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("cta.json"),
            output_dir: PathBuf::from("."),
            skip_existing: true,
            backup: false,
            force: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Build tags that are considered set.
    pub tags: Vec<String>,
    pub output_dir: PathBuf,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let built = Config::builder()
            .add_source(File::from(path.clone()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("analyze.tags")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load '{}': {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

        built.try_deserialize().map_err(|e| CliError::ConfigError {
            message: format!("Invalid configuration: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Path of the configuration file used when `--config` is absent.
    ///
    /// The platform config dir wins when it holds a file; otherwise
    /// `.archgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        Self::global_config_path()
            .filter(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// `<platform config dir>/archgen/config.toml`, if the platform has one.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "archgen", "archgen")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Render as TOML, as `config init` writes it.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Value at a dotted key, e.g. `generate.force`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "generate.config_file" => self.generate.config_file.display().to_string(),
            "generate.output_dir" => self.generate.output_dir.display().to_string(),
            "generate.skip_existing" => self.generate.skip_existing.to_string(),
            "generate.backup" => self.generate.backup.to_string(),
            "generate.force" => self.generate.force.to_string(),
            "analyze.tags" => self.analyze.tags.join(","),
            "analyze.output_dir" => self.analyze.output_dir.display().to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("Unknown config key: '{key}'"),
                    source: None,
                });
            }
        };
        Ok(value)
    }
}
