//! Atlas CLI - command-line interface for the catalog relationship graph.

use atlas_catalog::FsCatalog;
use atlas_cli::commands;
use atlas_cli::{Cli, Command, Config, Formatter};
use atlas_graph::{FileSource, GraphStore};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so command output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, then apply flag overrides
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.documents_dir {
        config.documents_dir = dir;
    }
    if let Some(path) = cli.relationships {
        config.relationships_file = Some(path);
    }

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let catalog = FsCatalog::new(&config.documents_dir);
    let store = GraphStore::new(FileSource::new(config.relationships_file()));

    // Handle commands
    match cli.command {
        Command::Validate => commands::execute_validate(&catalog, &store, &formatter)?,
        Command::Graph => commands::execute_graph(&catalog, &store, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &catalog, &store, &formatter)?,
    }

    Ok(())
}
