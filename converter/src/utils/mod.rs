//! # Converter Utilities Module
//!
//! Helpers shared by the conversion pipeline:
//!
//! - [`path`] - reading and writing nested JSON objects through dotted paths
//!   such as `colors.syntax.keyword`
//! - [`naming`] - turning VS Code slot names into Tailwind friendly keys
//!
//! ```no_run
//! use converter::utils::{naming::tailwind_color_name, path::{get_path, set_path}};
//! use serde_json::{Map, json};
//!
//! let mut root = Map::new();
//! set_path(&mut root, "colors.sidebar.background", json!("#252526"));
//! assert_eq!(get_path(&root, "colors.sidebar.background"), Some(&json!("#252526")));
//!
//! assert_eq!(tailwind_color_name("sideBar.background"), "side-bar-background");
//! ```

pub mod naming;
pub mod path;
