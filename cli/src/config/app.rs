use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use converter::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    conversion: ConversionConfig,
    #[serde(default)]
    fetch: FetchConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let timeout = self.fetch.timeout_secs();
        if !(MIN_FETCH_TIMEOUT_SECS..=MAX_FETCH_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::FetchTimeout {
                configured: timeout,
                min_limit: MIN_FETCH_TIMEOUT_SECS,
                max_limit: MAX_FETCH_TIMEOUT_SECS,
            });
        }

        if let Some(user_agent) = &self.fetch.user_agent {
            if user_agent.trim().is_empty() {
                errors.push(ConfigValidationError::EmptyUserAgent);
            }
        }

        if let Some(format) = &self.conversion.output_format {
            if format.parse::<OutputFormat>().is_err() {
                errors.push(ConfigValidationError::OutputFormat {
                    configured: format.clone(),
                });
            }
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if let Some(path) = self.conversion.custom_mappings() {
            if !path.exists() {
                errors.push(ConfigValidationError::CustomMappingsPath {
                    path: path.display().to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn conversion(&self) -> &ConversionConfig {
        &self.conversion
    }

    pub fn fetch(&self) -> &FetchConfig {
        &self.fetch
    }
}

/// `[conversion]` defaults; command line flags take precedence.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConversionConfig {
    include_semantic_colors: Option<bool>,
    preserve_original_names: Option<bool>,
    output_format: Option<String>,
    custom_mappings: Option<PathBuf>,
}

impl ConversionConfig {
    pub fn include_semantic_colors(&self) -> bool {
        self.include_semantic_colors.unwrap_or(true)
    }

    pub fn preserve_original_names(&self) -> bool {
        self.preserve_original_names.unwrap_or(false)
    }

    /// Falls back to `js` for missing or unparseable values; `validate`
    /// reports the latter.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
            .as_deref()
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }

    pub fn custom_mappings(&self) -> Option<&Path> {
        self.custom_mappings.as_deref()
    }
}

/// `[fetch]` settings for downloading themes over http(s)
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FetchConfig {
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl FetchConfig {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(converter::loader::DEFAULT_USER_AGENT)
    }
}
