//! Validate command implementation.

use atlas_catalog::FsCatalog;
use atlas_domain::Category;
use atlas_graph::{validate_relationships, FileSource, GraphStore};

use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the validate command.
///
/// Audits every relationship endpoint against the catalog and prints the
/// full report, grouped into invalid sources and invalid targets. Returns
/// an error (and therefore a non-zero exit) when any violation exists. A
/// notation file that fails to parse aborts immediately with the offending
/// line instead — that failure means the graph cannot be loaded at all.
pub fn execute_validate(
    catalog: &FsCatalog,
    store: &GraphStore<FileSource>,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("Reading catalog entries..."));
    let known = catalog.known_ids()?;
    println!(
        "Found {} entries across {} categories",
        known.len(),
        Category::ALL.len()
    );

    println!("{}", formatter.info("Parsing relationship notation..."));
    let relationships = store.get_all()?;
    println!("Parsed {} relationships", relationships.len());

    let report = validate_relationships(&relationships, &known);

    if report.valid {
        println!("{}", formatter.success("All relationships are valid"));
        return Ok(());
    }

    println!(
        "\n{}",
        formatter.error(&format!(
            "Found {} validation error(s)",
            report.violations.len()
        ))
    );

    let sources = report.invalid_sources();
    if !sources.is_empty() {
        println!("\nInvalid source slugs (entries that don't exist):");
        for id in sources {
            println!("  - {}", id);
        }
    }

    let targets = report.invalid_targets();
    if !targets.is_empty() {
        println!("\nInvalid target slugs (entries that don't exist):");
        for id in targets {
            println!("  - {}", id);
        }
    }

    println!("\nEnsure every referenced entry exists as a markdown file in the documents directory.");

    Err(CliError::ValidationFailed(report.violations.len()))
}
