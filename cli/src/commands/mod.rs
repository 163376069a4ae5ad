use converter::loader::load_custom_mappings;
use converter::validation::{ThemePathValidator, Validator};
use converter::{ColorMapping, ThemeLoader, ThemeSource};
use std::path::Path;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::error::AppResult;

pub mod analyze;
pub mod convert;
pub mod list_mappings;

/// Dispatch a parsed subcommand.
pub async fn run(command: Commands, config: &AppConfig) -> AppResult<()> {
    match command {
        Commands::Convert(args) => convert::run(args, config).await,
        Commands::Analyze(args) => analyze::run(args, config).await,
        Commands::ListMappings => {
            print!("{}", list_mappings::render());
            Ok(())
        }
    }
}

/// Classify the input and make sure a local theme file exists before any work.
pub fn resolve_source(input: &str) -> AppResult<ThemeSource> {
    let source = ThemeSource::from_input(input);
    if let ThemeSource::File(path) = &source {
        ThemePathValidator.validate(path.as_path())?;
    }
    Ok(source)
}

/// Custom mappings read from `path`, or none when no file is configured.
pub fn custom_mappings_from(path: Option<&Path>) -> AppResult<Vec<ColorMapping>> {
    match path {
        Some(path) => Ok(load_custom_mappings(path)?),
        None => Ok(Vec::new()),
    }
}

/// Theme loader using the `[fetch]` settings.
pub fn loader_from(config: &AppConfig) -> ThemeLoader {
    ThemeLoader::new()
        .with_timeout(config.fetch().timeout())
        .with_user_agent(config.fetch().user_agent())
}

/// One line naming the source kind and location.
pub fn describe_source(source: &ThemeSource) -> String {
    let kind = if source.is_url() { "URL" } else { "file" };
    format!("Source: {kind} - {source}")
}
