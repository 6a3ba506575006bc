use crate::catalog::{Catalog, MergeMode};
use crate::commands::{CmdMessage, CmdResult, ImportSource};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::CommandStore;
use tracing::debug;

use super::helpers::persist;

pub const PATH_LABEL: &str = "Import file path";
pub const MERGE_LABEL: &str = "Merge with existing commands?";

/// Reads an external collection and reconciles it with `catalog`. Without a preset source
/// the user is asked for the path and for merge-or-replace.
pub fn run<S: CommandStore, P: Prompter>(
    store: &mut S,
    prompter: &mut P,
    catalog: &Catalog,
    source: Option<&ImportSource>,
) -> Result<CmdResult> {
    let source = match source {
        Some(source) => source.clone(),
        None => {
            let path = prompter.prompt_string(PATH_LABEL)?;
            let merge = prompter.prompt_confirm(MERGE_LABEL)?;
            ImportSource::new(path, merge)
        }
    };

    let incoming = Catalog::from_commands(store.load_external(&source.path)?);
    debug!(
        path = %source.path.display(),
        mode = ?source.mode,
        incoming = incoming.len(),
        "importing"
    );
    let merged = catalog.merge(&incoming, source.mode);

    let mut result = persist(store, merged)?;
    let summary = match source.mode {
        MergeMode::MergeOverwrite => format!(
            "Merged {} command(s) from {}",
            incoming.len(),
            source.path.display()
        ),
        MergeMode::ReplaceAll => format!(
            "Replaced all commands with {} from {}",
            incoming.len(),
            source.path.display()
        ),
    };
    result.add_message(CmdMessage::success(summary));
    Ok(result)
}
