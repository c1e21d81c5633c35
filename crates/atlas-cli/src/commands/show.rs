//! Show command implementation.

use atlas_catalog::FsCatalog;
use atlas_domain::{EntityId, TitleSource};
use atlas_graph::{FileSource, GraphStore};

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the show command.
///
/// Lists relationships for one entry: outgoing only by default, or every
/// relationship touching the entry with `--both`.
pub fn execute_show(
    args: ShowArgs,
    catalog: &FsCatalog,
    store: &GraphStore<FileSource>,
    formatter: &Formatter,
) -> Result<()> {
    let id = EntityId::new(args.id).map_err(CliError::InvalidInput)?;

    let relationships = if args.both {
        store.incident_to_either(&id)?
    } else {
        store.outgoing(&id)?
    };

    match catalog.title(&id) {
        Some(title) => println!("{} ({})", title, id),
        None => println!("{}", id),
    }

    println!("{}", formatter.format_relationships(&id, &relationships)?);

    Ok(())
}
