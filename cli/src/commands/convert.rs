use colored::Colorize;
use converter::{ConversionOptions, TailwindConfig, ThemeConverter};
use std::path::{Path, PathBuf};

use super::{custom_mappings_from, describe_source, loader_from, resolve_source};
use crate::cli::ConvertArgs;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Merge command line flags over the `[conversion]` configuration.
///
/// Flags only ever switch features on or off relative to the config, so
/// `--no-semantic` wins over `include_semantic_colors = true` and
/// `--preserve-names` wins over `preserve_original_names = false`.
pub fn resolve_options(args: &ConvertArgs, config: &AppConfig) -> AppResult<ConversionOptions> {
    let conversion = config.conversion();

    let format = args.format.unwrap_or_else(|| conversion.output_format());
    let mappings_path = args
        .custom_mappings
        .as_deref()
        .or_else(|| conversion.custom_mappings());

    let custom_mappings = custom_mappings_from(mappings_path)?;

    Ok(ConversionOptions::default()
        .with_output_format(format)
        .with_semantic_colors(conversion.include_semantic_colors() && !args.no_semantic)
        .with_preserved_names(conversion.preserve_original_names() || args.preserve_names)
        .with_custom_mappings(custom_mappings))
}

/// Output path from `-o`, else `tailwind.config.<format>` in the working directory.
pub fn output_path(args: &ConvertArgs, options: &ConversionOptions) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(options.output_format.default_file_name()))
}

/// Convert and write, returning the written configuration and its path.
pub async fn execute(
    args: &ConvertArgs,
    config: &AppConfig,
) -> AppResult<(TailwindConfig, PathBuf)> {
    let source = resolve_source(&args.input)?;
    let options = resolve_options(args, config)?;
    let output = output_path(args, &options);

    println!("{}", "Converting VS Code theme to Tailwind CSS...".blue());
    println!("{}", describe_source(&source).bright_black());

    let converter = ThemeConverter::new(options).with_loader(loader_from(config));
    let tailwind = converter.convert_source(&source, Some(&output)).await?;

    Ok((tailwind, output))
}

pub async fn run(args: ConvertArgs, config: &AppConfig) -> AppResult<()> {
    let (tailwind, output) = execute(&args, config).await?;

    println!("{}", "Theme converted successfully!".green());
    println!(
        "{}",
        format!("Output: {}", absolute(&output)?.display()).bright_black()
    );
    println!(
        "{}",
        format!("Generated {} color definitions", tailwind.color_count()).cyan()
    );

    Ok(())
}

fn absolute(path: &Path) -> AppResult<PathBuf> {
    std::path::absolute(path).map_err(|e| AppError::Io(format!("{}: {e}", path.display())))
}
