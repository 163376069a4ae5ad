use claims::*;
use converter::utils::path::get_path;
use converter::{
    ColorMapping, ConversionOptions, ConverterError, OutputFormat, TailwindConfig, ThemeConverter,
    ThemeDocument, ThemeLoadError, ThemeSource,
};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

// Helper module for building test themes
mod theme_helpers {
    use super::*;

    pub const DARK_THEME: &str = r##"{
        // A small dark theme in VS Code's JSON-with-comments format
        "$schema": "vscode://schemas/color-theme",
        "name": "Test Theme",
        "type": "dark",
        "colors": {
            "editor.background": "#1e1e1e",
            "editor.foreground": "#d4d4d4",
            "sideBar.background": "#252526",
            "statusBar.background": "#007acc",
            "button.background": "#0e639c",
            "terminal.ansiRed": "#f14c4c",
            "terminal.ansiGreen": "#23d18b", /* trailing comma follows */
        },
        "tokenColors": [
            {
                "name": "Keywords",
                "scope": ["keyword", "keyword.control"],
                "settings": { "foreground": "#569cd6" }
            },
            {
                "name": "Strings",
                "scope": "string",
                "settings": { "foreground": "#ce9178" }
            },
        ],
        "semanticTokenColors": {
            "variable.readonly": "#4fc1ff"
        }
    }"##;

    pub fn test_theme() -> ThemeDocument {
        assert_ok!(converter::loader::parse_theme(DARK_THEME))
    }

    pub fn write_theme(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn color_at<'a>(config: &'a TailwindConfig, path: &str) -> Option<&'a Value> {
        get_path(config.extend(), path)
    }
}

use theme_helpers::*;

#[test]
fn test_converts_basic_theme() {
    let config = ThemeConverter::default().convert(&test_theme());

    assert_some!(config.colors());
    assert_eq!(
        color_at(&config, "colors.background"),
        Some(&json!("#1e1e1e"))
    );
    assert_eq!(
        color_at(&config, "colors.foreground"),
        Some(&json!("#d4d4d4"))
    );
}

#[test]
fn test_maps_nested_colors() {
    let config = ThemeConverter::default().convert(&test_theme());

    assert_eq!(
        color_at(&config, "colors.sidebar.background"),
        Some(&json!("#252526"))
    );
    assert_eq!(
        color_at(&config, "colors.statusBar.background"),
        Some(&json!("#007acc"))
    );
    assert_eq!(
        color_at(&config, "colors.button.primary"),
        Some(&json!("#0e639c"))
    );
}

#[test]
fn test_converts_syntax_and_terminal_colors() {
    let config = ThemeConverter::default().convert(&test_theme());

    assert_eq!(
        color_at(&config, "colors.syntax.keyword"),
        Some(&json!("#569cd6"))
    );
    assert_eq!(
        color_at(&config, "colors.syntax.string"),
        Some(&json!("#ce9178"))
    );
    assert_eq!(
        color_at(&config, "colors.terminal.red"),
        Some(&json!("#f14c4c"))
    );
    assert_eq!(
        color_at(&config, "colors.terminal.green"),
        Some(&json!("#23d18b"))
    );
    // Untouched categories fall back to defaults
    assert_eq!(
        color_at(&config, "colors.syntax.comment"),
        Some(&json!("#6a9955"))
    );
}

#[test]
fn test_semantic_colors_follow_option() {
    let with_semantic = ThemeConverter::default().convert(&test_theme());
    assert_eq!(
        color_at(&with_semantic, "colors")
            .and_then(|colors| colors.get("semantic-variable-readonly")),
        Some(&json!("#4fc1ff"))
    );

    let options = ConversionOptions::default().with_semantic_colors(false);
    let without_semantic = ThemeConverter::new(options).convert(&test_theme());
    assert_none!(
        color_at(&without_semantic, "colors")
            .and_then(|colors| colors.get("semantic-variable-readonly"))
    );
}

#[test]
fn test_preserves_original_names() {
    let converter = ThemeConverter::new(ConversionOptions::default().with_preserved_names(true));
    let config = converter.convert(&test_theme());
    let colors = assert_some!(config.colors());

    assert_eq!(colors.get("editor-background"), Some(&json!("#1e1e1e")));
    assert_eq!(colors.get("side-bar-background"), Some(&json!("#252526")));
    assert_eq!(colors.get("terminal-ansi-red"), Some(&json!("#f14c4c")));
}

#[test]
fn test_empty_theme_only_has_defaults() {
    let theme = assert_ok!(converter::loader::parse_theme("{}"));
    let config = ThemeConverter::default().convert(&theme);

    let colors = assert_some!(config.colors());
    assert_eq!(colors.len(), 1);
    assert_eq!(config.color_count(), 8);
}

#[test]
fn test_output_is_deterministic() {
    let converter = ThemeConverter::default();
    let first = serde_json::to_string(&converter.convert(&test_theme())).unwrap();
    let second = serde_json::to_string(&converter.convert(&test_theme())).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_convert_source_writes_js_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_theme(&temp_dir, "dark.json", DARK_THEME);
    let output = temp_dir.path().join("out/tailwind.config.js");

    let config = assert_ok!(
        ThemeConverter::default()
            .convert_source(&ThemeSource::File(input), Some(&output))
            .await
    );

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("module.exports = {"));
    assert!(written.contains("'background': '#1e1e1e'"));
    assert!(written.contains("plugins: [],"));
    assert_eq!(
        color_at(&config, "colors.background"),
        Some(&json!("#1e1e1e"))
    );
}

#[tokio::test]
async fn test_convert_source_writes_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_theme(&temp_dir, "dark.json", DARK_THEME);
    let output = temp_dir.path().join("tailwind.config.json");
    let converter =
        ThemeConverter::new(ConversionOptions::default().with_output_format(OutputFormat::Json));

    let config = assert_ok!(
        converter
            .convert_source(&ThemeSource::File(input), Some(&output))
            .await
    );

    let written: TailwindConfig =
        assert_ok!(serde_json::from_str(&fs::read_to_string(&output).unwrap()));
    assert_eq!(written, config);
}

#[tokio::test]
async fn test_convert_source_without_output_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_theme(&temp_dir, "dark.json", DARK_THEME);

    assert_ok!(
        ThemeConverter::default()
            .convert_source(&ThemeSource::File(input), None)
            .await
    );

    let entries = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn test_malformed_theme_stops_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_theme(
        &temp_dir,
        "broken.json",
        "{ \"colors\": { \"editor.background\": ",
    );
    let output = temp_dir.path().join("tailwind.config.js");

    let error = assert_err!(
        ThemeConverter::default()
            .convert_source(&ThemeSource::File(input), Some(&output))
            .await
    );

    assert_matches!(error, ConverterError::Load(ThemeLoadError::Parse { .. }));
    assert!(error.to_string().starts_with("Failed to read theme file"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_custom_mappings_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let mappings_path = write_theme(
        &temp_dir,
        "mappings.toml",
        r#"
[[mappings]]
vscodeKey = "editor.background"
tailwindPath = "colors.surface"
"#,
    );
    let mappings = assert_ok!(converter::loader::load_custom_mappings(&mappings_path));
    let input = write_theme(&temp_dir, "dark.json", DARK_THEME);

    let config = assert_ok!(
        ThemeConverter::new(ConversionOptions::default().with_custom_mappings(mappings))
            .convert_source(&ThemeSource::File(input), None)
            .await
    );

    assert_eq!(color_at(&config, "colors.surface"), Some(&json!("#1e1e1e")));
    assert_eq!(
        color_at(&config, "colors.background"),
        Some(&json!("#1e1e1e"))
    );
}

#[test]
fn test_custom_mapping_wins_over_default_path() {
    let converter = ThemeConverter::new(ConversionOptions::default().with_custom_mappings(vec![
        ColorMapping::custom(
            "sideBar.background",
            "colors.background",
            "Sidebar as page background",
        ),
    ]));

    let config = converter.convert(&test_theme());
    assert_eq!(
        color_at(&config, "colors.background"),
        Some(&json!("#252526"))
    );
}
