use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod limits;
pub mod validation;

pub use app::{AppConfig, ConversionConfig, FetchConfig};
pub use validation::ConfigValidationError;

use crate::error::{AppError, AppResult};
use limits::DEFAULT_LOG_LEVEL;
use validation::combine_user_messages;

/// Project-local configuration file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "themewind.toml";

/// Environment variables use `THEMEWIND__<SECTION>__<KEY>`, e.g.
/// `THEMEWIND__FETCH__TIMEOUT_SECS=60`
pub const ENV_PREFIX: &str = "THEMEWIND";

/// `<config dir>/themewind/config.toml`, when the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("themewind").join("config.toml"))
}

/// Pick the configuration file to read.
///
/// An explicit `--config` path must exist. Otherwise `./themewind.toml` is
/// used when present, then the per-user file. No file at all is fine: every
/// setting has a default.
pub fn discover_config_file(explicit: Option<&Path>) -> AppResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user_config_path().filter(|path| path.is_file()))
}

/// Environment source with the `THEMEWIND__` prefix and `__` nesting.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Build the configuration from an optional TOML file overlaid with
/// environment values. Does not validate.
pub fn build_config(file: Option<&Path>, env: Environment) -> AppResult<AppConfig> {
    let mut builder = Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    let config = builder
        .add_source(env) // environment entries override file values when present
        .build()
        .map_err(|e| {
            AppError::Config(format!(
                "Configuration loading failed: {e}. Please check your {CONFIG_FILE_NAME} file and environment variables."
            ))
        })?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| AppError::Config(format!("Failed to deserialize config: {e}")))
}

/// Load `.env`, read and validate the configuration.
pub fn load_config(explicit: Option<&Path>) -> AppResult<AppConfig> {
    dotenv::dotenv().ok();

    let file = discover_config_file(explicit)?;
    let config = build_config(file.as_deref(), env_source())?;

    config
        .validate()
        .map_err(|errors| AppError::Config(combine_user_messages(&errors)))?;

    Ok(config)
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
