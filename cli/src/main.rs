use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use themewind::cli::Cli;
use themewind::error::AppResult;
use themewind::{commands, config, logger};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {}", "error:".red().bold(), e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let app_config = config::load_config(cli.config.as_deref())?;

    if let Err(e) = logger::setup_logger(app_config.logging(), cli.verbose) {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }

    commands::run(cli.command, &app_config).await
}
