use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::errors::WriteError;
use crate::model::TailwindConfig;
use crate::options::OutputFormat;

const CONTENT_GLOBS: &[&str] = &[
    "./src/**/*.{js,ts,jsx,tsx,mdx}",
    "./pages/**/*.{js,ts,jsx,tsx,mdx}",
    "./components/**/*.{js,ts,jsx,tsx,mdx}",
    "./app/**/*.{js,ts,jsx,tsx,mdx}",
];

/// Render a configuration in the requested format.
///
/// `json` is the whole document pretty printed with two space indentation.
/// `js` is a `tailwind.config.js` CommonJS module whose `theme.extend` block
/// is the same data with single quoted strings.
pub fn render_config(config: &TailwindConfig, format: OutputFormat) -> Result<String, WriteError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Js => render_js(config),
    }
}

fn render_js(config: &TailwindConfig) -> Result<String, WriteError> {
    let extend = to_indented_json(config.extend(), b"      ")?.replace('"', "'");

    let mut out = String::from("/** @type {import('tailwindcss').Config} */\n");
    out.push_str("module.exports = {\n");
    out.push_str("  content: [\n");
    for glob in CONTENT_GLOBS {
        out.push_str(&format!("    '{glob}',\n"));
    }
    out.push_str("  ],\n");
    out.push_str("  theme: {\n");
    out.push_str(&format!("    extend: {extend},\n"));
    out.push_str("  },\n");
    out.push_str("  plugins: [],\n");
    out.push('}');

    Ok(out)
}

fn to_indented_json<T: Serialize>(value: &T, indent: &[u8]) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent));
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render and write a configuration, creating parent directories as needed.
pub fn write_config(
    config: &TailwindConfig,
    path: &Path,
    format: OutputFormat,
) -> Result<(), WriteError> {
    let content = render_config(config, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WriteError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| WriteError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::info!("Wrote {} configuration to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::set_path;
    use claims::*;
    use serde_json::{Map, Value, json};
    use tempfile::TempDir;

    fn sample_config() -> TailwindConfig {
        let mut extend = Map::new();
        set_path(&mut extend, "colors.background", json!("#1e1e1e"));
        set_path(&mut extend, "colors.syntax.keyword", json!("#569cd6"));
        TailwindConfig::new(extend)
    }

    #[test]
    fn test_render_json() {
        let rendered = assert_ok!(render_config(&sample_config(), OutputFormat::Json));

        assert!(rendered.starts_with("{\n  \"theme\": {\n    \"extend\": {"));
        let parsed: Value = assert_ok!(serde_json::from_str(&rendered));
        assert_eq!(parsed["theme"]["extend"]["colors"]["background"], "#1e1e1e");
    }

    #[test]
    fn test_render_js_module() {
        let rendered = assert_ok!(render_config(&sample_config(), OutputFormat::Js));

        let header = "/** @type {import('tailwindcss').Config} */\nmodule.exports = {";
        assert!(rendered.starts_with(header));
        for glob in CONTENT_GLOBS {
            assert!(rendered.contains(&format!("'{glob}'")));
        }
        assert!(rendered.contains("  plugins: [],\n}"));
        assert!(rendered.contains("    extend: {\n      'colors': {\n"));
        assert!(rendered.contains("'background': '#1e1e1e'"));
        assert!(!rendered.contains('"'));
    }

    #[test]
    fn test_render_js_empty_extend() {
        let rendered = assert_ok!(render_config(
            &TailwindConfig::new(Map::new()),
            OutputFormat::Js
        ));
        assert!(rendered.contains("    extend: {},\n"));
    }

    #[test]
    fn test_write_config_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/tailwind.config.json");

        assert_ok!(write_config(&sample_config(), &path, OutputFormat::Json));

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: TailwindConfig = assert_ok!(serde_json::from_str(&written));
        assert_eq!(parsed, sample_config());
    }

    #[test]
    fn test_write_config_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tailwind.config.js");
        std::fs::write(&path, "old").unwrap();

        assert_ok!(write_config(&sample_config(), &path, OutputFormat::Js));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("/** @type"));
    }
}
