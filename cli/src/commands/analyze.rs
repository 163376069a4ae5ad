use colored::Colorize;
use converter::color::{hex_to_rgb, normalize_color, sanitize_color};
use converter::model::slot_text;
use converter::validation::{HexColorValidator, Validator};
use converter::{ConversionOptions, ConversionReport, ThemeConverter, ThemeDocument};
use std::fmt::Write;

use super::{custom_mappings_from, describe_source, loader_from, resolve_source};
use crate::cli::AnalyzeArgs;
use crate::config::AppConfig;
use crate::error::AppResult;

/// A color value preceded by a swatch in its own color. Values that are not
/// hex colors are returned as they are.
pub fn swatch(value: &str) -> String {
    match sanitize_color(value).as_deref().and_then(hex_to_rgb) {
        Some((r, g, b)) => format!("{} {}", "██".truecolor(r, g, b), value.truecolor(r, g, b)),
        None => value.to_string(),
    }
}

/// Why a raw color slot value would be dropped by a conversion, if it would.
pub fn color_problem(value: &str) -> Option<String> {
    HexColorValidator
        .validate(&normalize_color(value))
        .err()
        .map(|e| e.reason().to_string())
}

/// Theme name, type, every color and optionally the token rules.
pub fn render_analysis(theme: &ThemeDocument, show_tokens: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Theme Information:".green());
    let _ = writeln!(
        out,
        "  Name: {}",
        theme.name.as_deref().unwrap_or("Unknown").cyan()
    );
    let theme_type = theme
        .theme_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let _ = writeln!(out, "  Type: {}", theme_type.cyan());

    if let Some(colors) = &theme.colors {
        let _ = writeln!(out, "\nAvailable Colors ({}):", colors.len());
        for (key, value) in colors {
            let (shown, problem) = match value.as_str() {
                Some(text) => (swatch(text), color_problem(text)),
                None => (
                    slot_text(value).into_owned(),
                    (!value.is_null()).then(|| "Not a color string".to_string()),
                ),
            };
            match problem {
                Some(reason) => {
                    let _ = writeln!(
                        out,
                        "  {}: {} {}",
                        key.bright_black(),
                        shown,
                        format!("({reason})").red()
                    );
                }
                None => {
                    let _ = writeln!(out, "  {}: {}", key.bright_black(), shown);
                }
            }
        }
    }

    if show_tokens {
        if let Some(rules) = &theme.token_colors {
            let _ = writeln!(out, "\nToken Colors ({}):", rules.len());
            for (index, rule) in rules.iter().enumerate() {
                let Some(foreground) = rule.settings.foreground.as_deref() else {
                    continue;
                };
                let scope = rule
                    .scope
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "None".to_string());

                let _ = writeln!(
                    out,
                    "  {}. {}",
                    index + 1,
                    rule.name.as_deref().unwrap_or("Unnamed").bright_black()
                );
                let _ = writeln!(out, "     Scope: {}", scope.cyan());
                let _ = writeln!(out, "     Color: {}", swatch(foreground));
            }
        }
    }

    out
}

/// What a conversion with the current settings would produce.
pub fn render_summary(report: &ConversionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "Conversion Preview:".green());
    let _ = writeln!(out, "  Mapped colors:      {}", report.base_colors);
    let _ = writeln!(out, "  Syntax colors:      {}", report.syntax_writes);
    let _ = writeln!(
        out,
        "  Default syntax:     {}",
        report.defaults_applied.join(", ")
    );
    let _ = writeln!(out, "  Semantic colors:    {}", report.semantic_colors);
    if report.preserved_names > 0 {
        let _ = writeln!(out, "  Preserved names:    {}", report.preserved_names);
    }
    let _ = writeln!(out, "  Invalid (dropped):  {}", report.dropped_count());
    for (source, value) in &report.dropped {
        let _ = writeln!(out, "    {} = {}", source.bright_black(), value.red());
    }

    out
}

/// Conversion options matching what `convert` would use with no flags given.
pub fn preview_options(config: &AppConfig) -> AppResult<ConversionOptions> {
    let conversion = config.conversion();

    Ok(ConversionOptions::default()
        .with_output_format(conversion.output_format())
        .with_semantic_colors(conversion.include_semantic_colors())
        .with_preserved_names(conversion.preserve_original_names())
        .with_custom_mappings(custom_mappings_from(conversion.custom_mappings())?))
}

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> AppResult<()> {
    let source = resolve_source(&args.input)?;

    println!("{}", "Analyzing VS Code theme...".blue());
    println!("{}", describe_source(&source).bright_black());

    let theme = loader_from(config).load(&source).await?;
    print!("{}", render_analysis(&theme, args.show_tokens));

    let (_, report) = ThemeConverter::new(preview_options(config)?).convert_with_report(&theme);
    print!("{}", render_summary(&report));

    Ok(())
}
