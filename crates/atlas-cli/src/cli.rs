//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Atlas CLI - Query and validate the catalog relationship graph.
#[derive(Debug, Parser)]
#[command(name = "atlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Documents directory (overrides configuration)
    #[arg(short, long, global = true)]
    pub documents_dir: Option<PathBuf>,

    /// Relationship notation file (overrides configuration)
    #[arg(short, long, global = true)]
    pub relationships: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (ids only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every relationship endpoint against the catalog
    Validate,

    /// Export the node/link view for the interactive graph
    Graph,

    /// Show relationships for one entry
    Show(ShowArgs),
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Entry id (category/slug)
    pub id: String,

    /// Include relationships where the entry is the target
    #[arg(long)]
    pub both: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["atlas", "validate"]).unwrap();
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn test_parse_show_with_both() {
        let cli =
            Cli::try_parse_from(["atlas", "show", "patterns/active-partner", "--both"]).unwrap();
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.id, "patterns/active-partner");
                assert!(args.both);
            }
            other => panic!("expected show, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["atlas", "--no-color", "-f", "json", "graph"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
