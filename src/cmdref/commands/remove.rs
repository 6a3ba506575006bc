use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::CommandStore;

use super::helpers::persist;

pub const SELECT_LABEL: &str = "Select command to delete";

/// Deletes after confirmation. Once a name was picked the catalog is saved whether or not the
/// deletion was confirmed.
pub fn run<S: CommandStore, P: Prompter>(
    store: &mut S,
    prompter: &mut P,
    catalog: &Catalog,
) -> Result<CmdResult> {
    if catalog.is_empty() {
        let mut result = CmdResult::new(catalog.clone());
        result.add_message(CmdMessage::info("No commands to delete"));
        return Ok(result);
    }

    let selection = prompter.prompt_select(SELECT_LABEL, &catalog.names())?;
    let confirmed = prompter.prompt_confirm(&format!(
        "Are you sure you want to delete '{}'",
        selection
    ))?;

    let next = if confirmed {
        catalog.delete(&selection)
    } else {
        catalog.clone()
    };

    let mut result = persist(store, next)?;
    if confirmed {
        result.add_message(CmdMessage::success(format!("Command deleted: {}", selection)));
    } else {
        result.add_message(CmdMessage::info(format!("Kept: {}", selection)));
    }
    Ok(result)
}
