//! # Themewind
//!
//! Command line front end for the `converter` library: converts VS Code
//! color themes (files or http(s) URLs) into `tailwind.config.js` or JSON,
//! analyzes themes and lists the default color mappings.
//!
//! ## Modules
//!
//! - [`cli`] - Command line arguments
//! - [`commands`] - `convert`, `analyze` and `list-mappings`
//! - [`config`] - `themewind.toml` and environment configuration
//! - [`error`] - Application error type
//! - [`logger`] - Logging setup
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
