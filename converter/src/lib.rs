//! # Themewind Converter Library
//!
//! Core library for turning VS Code color themes into Tailwind CSS
//! configuration. This library provides theme loading and cleanup, color
//! normalization, table-driven slot mapping and config rendering.
//!
//! ## Modules
//!
//! - [`color`] - Hex color validation and normalization
//! - [`converter`] - The theme conversion pipeline
//! - [`errors`] - Error types for loading, mapping and writing
//! - [`loader`] - Reading theme documents from files and URLs
//! - [`mappings`] - Default slot and scope mapping tables
//! - [`model`] - VS Code theme and Tailwind config data models
//! - [`options`] - Conversion options and output formats
//! - [`utils`] - Dotted path helpers and color name generation
//! - [`validation`] - Validators for colors, mappings and input paths
//! - [`writer`] - Rendering and writing Tailwind configuration files

pub mod color;
pub mod converter;
pub mod errors;
pub mod loader;
pub mod mappings;
pub mod model;
pub mod options;
pub mod utils;
pub mod validation;
pub mod writer;

pub use converter::{ConversionReport, ThemeConverter};
pub use errors::{
    ConverterError, ConverterResult, HttpError, MappingError, ThemeLoadError, WriteError,
};
pub use loader::{ThemeLoader, ThemeSource};
pub use mappings::{ColorMapping, DEFAULT_COLOR_MAPPINGS, SYNTAX_SCOPE_MAPPINGS};
pub use model::{TailwindConfig, ThemeDocument};
pub use options::{ConversionOptions, OutputFormat};
