use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::mappings::ColorMapping;

/// Output file format for the generated Tailwind configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `tailwind.config.js` CommonJS module
    #[default]
    Js,
    /// Plain JSON document
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Js => "js",
            OutputFormat::Json => "json",
        }
    }

    /// File name used when no output path is given.
    pub fn default_file_name(&self) -> String {
        format!("tailwind.config.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "js" | "javascript" => Ok(OutputFormat::Js),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unsupported output format '{other}' (expected 'js' or 'json')"
            )),
        }
    }
}

/// Options controlling a theme conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Emit `semantic-*` colors from `semanticTokenColors` (default: true)
    pub include_semantic_colors: bool,
    /// Extra mappings applied after the default table
    pub custom_mappings: Vec<ColorMapping>,
    pub output_format: OutputFormat,
    /// Also emit every theme color under its kebab-cased VS Code name (default: false)
    pub preserve_original_names: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            include_semantic_colors: true,
            custom_mappings: Vec::new(),
            output_format: OutputFormat::Js,
            preserve_original_names: false,
        }
    }
}

impl ConversionOptions {
    pub fn with_semantic_colors(mut self, include: bool) -> Self {
        self.include_semantic_colors = include;
        self
    }

    pub fn with_custom_mappings(mut self, mappings: Vec<ColorMapping>) -> Self {
        self.custom_mappings = mappings;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_preserved_names(mut self, preserve: bool) -> Self {
        self.preserve_original_names = preserve;
        self
    }
}
