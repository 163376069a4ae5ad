use converter::errors::{ConverterError, MappingError, ThemeLoadError, WriteError};
use converter::validation::ValidationError;
use std::fmt::Display;

use crate::config::ConfigValidationError;

/// Application-wide error types for the themewind command line tool.
///
/// Every command returns [`AppResult`]; `main` prints the error in red and
/// exits with status 1. Individual invalid colors are never errors, they are
/// dropped by the converter.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Input`] - Bad command line input such as a missing theme file
/// - [`Conversion`] - Loading, parsing or converting the theme failed
/// - [`Io`] - Writing output or other file system failures
///
/// # Examples
///
/// ```no_run
/// use themewind::error::{AppError, AppResult};
///
/// fn require_input(input: &str) -> AppResult<()> {
///     if input.is_empty() {
///         return Err(AppError::Input("No theme given".to_string()));
///     }
///     Ok(())
/// }
/// ```
///
/// [`Config`]: AppError::Config
/// [`Input`]: AppError::Input
/// [`Conversion`]: AppError::Conversion
/// [`Io`]: AppError::Io
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// Raised when `themewind.toml` cannot be parsed, an explicitly requested
    /// config file is missing, or a value is out of range.
    Config(String),

    /// Command line input problems, e.g. a theme path that does not exist
    /// and is not a URL, or an unreadable custom mappings file.
    Input(String),

    /// Theme loading or conversion failures.
    Conversion(String),

    /// File system failures outside of theme loading.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Input(msg) => write!(f, "Input Error: {msg}"),
            AppError::Conversion(msg) => write!(f, "Conversion failed: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ThemeLoadError> for AppError {
    fn from(err: ThemeLoadError) -> Self {
        match err {
            ThemeLoadError::NotFound { .. } => AppError::Input(err.to_string()),
            _ => AppError::Conversion(err.to_string()),
        }
    }
}

impl From<MappingError> for AppError {
    fn from(err: MappingError) -> Self {
        AppError::Input(err.to_string())
    }
}

impl From<WriteError> for AppError {
    fn from(err: WriteError) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<ConverterError> for AppError {
    fn from(err: ConverterError) -> Self {
        match err {
            ConverterError::Load(e) => e.into(),
            ConverterError::Mapping(e) => e.into(),
            ConverterError::Write(e) => e.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Input(err.user_message())
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(err: ConfigValidationError) -> Self {
        AppError::Config(err.user_message())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
