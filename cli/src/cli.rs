//! Command line definition.

use clap::{ArgAction, Args, Parser, Subcommand};
use converter::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "themewind")]
#[command(version)]
#[command(about = "Convert VS Code themes to Tailwind CSS configurations")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: ./themewind.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a VS Code theme file or URL to Tailwind CSS configuration
    Convert(ConvertArgs),

    /// Analyze a VS Code theme file or URL and show available colors
    Analyze(AnalyzeArgs),

    /// List all default color mappings
    ListMappings,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Path to VS Code theme JSON file or URL to theme file
    pub input: String,

    /// Output file path (default: tailwind.config.<format>)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format: js or json
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Exclude semantic token colors
    #[arg(long)]
    pub no_semantic: bool,

    /// Preserve original VS Code color names
    #[arg(long)]
    pub preserve_names: bool,

    /// Path to a custom mappings file (.json or .toml)
    #[arg(long, value_name = "PATH")]
    pub custom_mappings: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Path to VS Code theme JSON file or URL to theme file
    pub input: String,

    /// Show token color information
    #[arg(long)]
    pub show_tokens: bool,
}
