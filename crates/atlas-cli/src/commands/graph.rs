//! Graph command implementation.

use atlas_catalog::FsCatalog;
use atlas_graph::{project, FileSource, GraphStore};

use crate::error::Result;
use crate::output::Formatter;

/// Execute the graph command.
///
/// Projects the full relationship list into the node/link view and prints
/// it. JSON output is what the interactive graph view consumes; display
/// titles come from the catalog, falling back to raw slugs.
pub fn execute_graph(
    catalog: &FsCatalog,
    store: &GraphStore<FileSource>,
    formatter: &Formatter,
) -> Result<()> {
    let relationships = store.get_all()?;
    let data = project(&relationships, catalog);

    println!("{}", formatter.format_graph(&data)?);

    Ok(())
}
