use std::path::Path;
use thiserror::Error;

use crate::color::is_valid_color;
use crate::mappings::ColorMapping;

/// Core validation trait shared by every validator in the workspace.
///
/// Validators are small unit structs, so they can be combined freely and
/// reused by the library and the command line front end.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```
/// use converter::validation::{HexColorValidator, Validator};
///
/// assert!(HexColorValidator.validate("#1e1e1e").is_ok());
/// assert!(HexColorValidator.validate("tomato").is_err());
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Validation failures for colors, mappings and input paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Invalid mapping '{key}': {reason}")]
    InvalidMapping { key: String, reason: String },

    #[error("Invalid theme path '{path}': {reason}")]
    InvalidThemePath { path: String, reason: String },
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::InvalidColor { value, reason } => {
                format!(
                    "Invalid color: '{}'\n\n\
                    Reason: {}\n\n\
                    Colors must be '#' followed by 3, 6 or 8 hex digits.",
                    value, reason
                )
            }
            ValidationError::InvalidMapping { key, reason } => {
                format!(
                    "Invalid color mapping: '{}'\n\n\
                    Reason: {}\n\n\
                    Each mapping needs a VS Code key and a dotted Tailwind path like 'colors.panel.border'.",
                    key, reason
                )
            }
            ValidationError::InvalidThemePath { path, reason } => {
                format!(
                    "Invalid theme path: '{}'\n\n\
                    Reason: {}\n\n\
                    Please pass an existing theme file or an http(s) URL.",
                    path, reason
                )
            }
        }
    }

    /// The short reason without the surrounding help text.
    pub fn reason(&self) -> &str {
        match self {
            ValidationError::InvalidColor { reason, .. }
            | ValidationError::InvalidMapping { reason, .. }
            | ValidationError::InvalidThemePath { reason, .. } => reason,
        }
    }
}

/// Validator for normalized hex colors
pub struct HexColorValidator;

impl Validator<str> for HexColorValidator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ValidationError::InvalidColor {
                value: input.to_string(),
                reason: "Color cannot be empty".to_string(),
            });
        }

        if !input.starts_with('#') {
            return Err(ValidationError::InvalidColor {
                value: input.to_string(),
                reason: "Missing '#' prefix".to_string(),
            });
        }

        if !is_valid_color(input) {
            return Err(ValidationError::InvalidColor {
                value: input.to_string(),
                reason: "Expected 3, 6 or 8 hex digits".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for caller supplied color mappings
pub struct ColorMappingValidator;

impl Validator<ColorMapping> for ColorMappingValidator {
    type Error = ValidationError;

    fn validate(&self, input: &ColorMapping) -> Result<(), Self::Error> {
        let key = input.vscode_key.as_ref();
        let path = input.tailwind_path.as_ref();

        if key.trim().is_empty() {
            return Err(ValidationError::InvalidMapping {
                key: key.to_string(),
                reason: "VS Code key cannot be empty".to_string(),
            });
        }

        if key.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidMapping {
                key: key.to_string(),
                reason: "VS Code key cannot contain whitespace".to_string(),
            });
        }

        if path.trim().is_empty() {
            return Err(ValidationError::InvalidMapping {
                key: key.to_string(),
                reason: "Tailwind path cannot be empty".to_string(),
            });
        }

        // "colors..border" or ".colors" would create empty-named objects
        if path.split('.').any(|segment| segment.trim().is_empty()) {
            return Err(ValidationError::InvalidMapping {
                key: key.to_string(),
                reason: format!("Tailwind path '{path}' contains an empty segment"),
            });
        }

        if path.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidMapping {
                key: key.to_string(),
                reason: format!("Tailwind path '{path}' cannot contain whitespace"),
            });
        }

        Ok(())
    }
}

/// Validator for local theme files
pub struct ThemePathValidator;

impl Validator<Path> for ThemePathValidator {
    type Error = ValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(ValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(ValidationError::InvalidThemePath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        Ok(())
    }
}
