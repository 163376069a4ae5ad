//! The conversion pipeline from a [`ThemeDocument`] to a [`TailwindConfig`].
//!
//! A conversion runs six passes in a fixed order. Later passes may overwrite
//! values written by earlier ones, so the order is part of the contract:
//!
//! 1. base colors from the effective mapping table (defaults, then custom)
//! 2. flat copies of every theme color under its kebab-cased name (optional)
//! 3. syntax colors from `tokenColors`, first matching scope pattern wins
//! 4. built-in defaults for syntax categories that are still unset
//! 5. `semantic-*` colors from `semanticTokenColors` (optional)
//! 6. custom mappings again, overwriting whatever is at their paths
//!
//! Invalid colors never fail a conversion. They are dropped, logged at debug
//! level and listed in the [`ConversionReport`].

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::Path;

use crate::color::sanitize_color;
use crate::errors::ConverterResult;
use crate::loader::{ThemeLoader, ThemeSource};
use crate::mappings::{DEFAULT_SYNTAX_COLORS, effective_mappings, match_scope};
use crate::model::{TailwindConfig, ThemeDocument, slot_text};
use crate::options::ConversionOptions;
use crate::utils::naming::tailwind_color_name;
use crate::utils::path::{has_path, set_path};
use crate::writer::write_config;

/// Statistics collected while converting a single theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Mapping table entries written in the base pass
    pub base_colors: usize,
    /// Flat `colors[<kebab-name>]` entries written
    pub preserved_names: usize,
    /// Last color recorded for each matched scope pattern
    pub syntax_colors: IndexMap<String, String>,
    /// Writes made by the syntax pass (one rule may write several)
    pub syntax_writes: usize,
    /// Syntax categories that fell back to a built-in default
    pub defaults_applied: Vec<&'static str>,
    pub semantic_colors: usize,
    pub custom_overrides: usize,
    /// Source location to raw value for every color that failed validation
    pub dropped: IndexMap<String, String>,
}

impl ConversionReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    fn drop_color(&mut self, source: String, value: &str) {
        log::debug!("Dropping invalid color {source} = {value:?}");
        self.dropped.entry(source).or_insert_with(|| value.to_string());
    }
}

/// Converts VS Code themes into Tailwind configuration.
#[derive(Debug, Clone, Default)]
pub struct ThemeConverter {
    options: ConversionOptions,
    loader: ThemeLoader,
}

impl ThemeConverter {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            loader: ThemeLoader::default(),
        }
    }

    /// Use a custom loader, e.g. with a different timeout or user agent.
    pub fn with_loader(mut self, loader: ThemeLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert a parsed theme. Always succeeds.
    pub fn convert(&self, theme: &ThemeDocument) -> TailwindConfig {
        self.convert_with_report(theme).0
    }

    /// Convert a parsed theme and report what each pass did.
    pub fn convert_with_report(&self, theme: &ThemeDocument) -> (TailwindConfig, ConversionReport) {
        let mut extend = Map::new();
        extend.insert("colors".to_string(), Value::Object(Map::new()));
        let mut report = ConversionReport::default();

        self.apply_base_colors(theme, &mut extend, &mut report);
        if self.options.preserve_original_names {
            self.apply_preserved_names(theme, &mut extend, &mut report);
        }
        self.apply_syntax_colors(theme, &mut extend, &mut report);
        self.apply_default_syntax_colors(&mut extend, &mut report);
        if self.options.include_semantic_colors {
            self.apply_semantic_colors(theme, &mut extend, &mut report);
        }
        self.apply_custom_mappings(theme, &mut extend, &mut report);

        log::debug!(
            "Converted theme '{}': {} base, {} preserved, {} syntax, {} defaults, {} semantic, {} custom, {} dropped",
            theme.name.as_deref().unwrap_or("unnamed"),
            report.base_colors,
            report.preserved_names,
            report.syntax_writes,
            report.defaults_applied.len(),
            report.semantic_colors,
            report.custom_overrides,
            report.dropped_count()
        );

        (TailwindConfig::new(extend), report)
    }

    /// Load a theme from a file or URL, convert it and, when `output` is
    /// given, write it in the configured output format.
    pub async fn convert_source(
        &self,
        source: &ThemeSource,
        output: Option<&Path>,
    ) -> ConverterResult<TailwindConfig> {
        let theme = self.loader.load(source).await?;
        let config = self.convert(&theme);

        if let Some(path) = output {
            write_config(&config, path, self.options.output_format)?;
        }

        Ok(config)
    }

    fn apply_base_colors(
        &self,
        theme: &ThemeDocument,
        extend: &mut Map<String, Value>,
        report: &mut ConversionReport,
    ) {
        for mapping in effective_mappings(&self.options.custom_mappings) {
            let Some(raw) = theme.color_value(&mapping.vscode_key) else {
                continue;
            };

            match raw.as_str().and_then(sanitize_color) {
                Some(color) => {
                    set_path(extend, &mapping.tailwind_path, Value::String(color));
                    report.base_colors += 1;
                }
                None => {
                    let source = format!("colors.{}", mapping.vscode_key);
                    report.drop_color(source, &slot_text(raw));
                }
            }
        }
    }

    fn apply_preserved_names(
        &self,
        theme: &ThemeDocument,
        extend: &mut Map<String, Value>,
        report: &mut ConversionReport,
    ) {
        let Some(colors) = &theme.colors else {
            return;
        };

        for (key, raw) in colors.iter().filter(|(_, value)| !value.is_null()) {
            match raw.as_str().and_then(sanitize_color) {
                Some(color) => {
                    insert_flat_color(extend, tailwind_color_name(key), color);
                    report.preserved_names += 1;
                }
                None => report.drop_color(format!("colors.{key}"), &slot_text(raw)),
            }
        }
    }

    fn apply_syntax_colors(
        &self,
        theme: &ThemeDocument,
        extend: &mut Map<String, Value>,
        report: &mut ConversionReport,
    ) {
        let Some(rules) = &theme.token_colors else {
            return;
        };

        for (index, rule) in rules.iter().enumerate() {
            let Some(scope) = rule.scope.as_ref().filter(|s| !s.is_empty()) else {
                continue;
            };
            let Some(raw) = rule.settings.foreground.as_deref().filter(|f| !f.is_empty()) else {
                continue;
            };
            let Some(color) = sanitize_color(raw) else {
                report.drop_color(format!("tokenColors[{index}] ({scope})"), raw);
                continue;
            };

            for scope in scope.scopes() {
                if let Some((pattern, path)) = match_scope(scope) {
                    set_path(extend, path, Value::String(color.clone()));
                    report
                        .syntax_colors
                        .insert(pattern.to_string(), color.clone());
                    report.syntax_writes += 1;
                }
            }
        }
    }

    fn apply_default_syntax_colors(
        &self,
        extend: &mut Map<String, Value>,
        report: &mut ConversionReport,
    ) {
        for default in DEFAULT_SYNTAX_COLORS {
            if has_path(extend, default.path) {
                continue;
            }
            set_path(
                extend,
                default.path,
                Value::String(default.color.to_string()),
            );
            report.defaults_applied.push(default.category);
        }
    }

    fn apply_semantic_colors(
        &self,
        theme: &ThemeDocument,
        extend: &mut Map<String, Value>,
        report: &mut ConversionReport,
    ) {
        let Some(tokens) = &theme.semantic_token_colors else {
            return;
        };

        for (name, value) in tokens {
            let Some(raw) = value.foreground() else {
                continue;
            };

            match sanitize_color(raw) {
                Some(color) => {
                    let key = format!("semantic-{}", tailwind_color_name(name));
                    insert_flat_color(extend, key, color);
                    report.semantic_colors += 1;
                }
                None => report.drop_color(format!("semanticTokenColors.{name}"), raw),
            }
        }
    }

    fn apply_custom_mappings(
        &self,
        theme: &ThemeDocument,
        extend: &mut Map<String, Value>,
        report: &mut ConversionReport,
    ) {
        for mapping in &self.options.custom_mappings {
            // Invalid values were already reported by the base pass
            let Some(color) = theme.color(&mapping.vscode_key).and_then(sanitize_color) else {
                continue;
            };
            set_path(extend, &mapping.tailwind_path, Value::String(color));
            report.custom_overrides += 1;
        }
    }
}

/// Insert `colors[key]` directly, without splitting `key` on dots.
fn insert_flat_color(extend: &mut Map<String, Value>, key: String, color: String) {
    let colors = extend
        .entry("colors".to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !colors.is_object() {
        *colors = Value::Object(Map::new());
    }
    if let Value::Object(colors) = colors {
        colors.insert(key, Value::String(color));
    }
}
