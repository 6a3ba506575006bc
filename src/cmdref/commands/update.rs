use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::CommandStore;

use super::helpers::{persist, prompt_fields, select_command};

pub const SELECT_LABEL: &str = "Select a command to update";

/// Re-prompts every field but the name, which stays fixed.
pub fn run<S: CommandStore, P: Prompter>(
    store: &mut S,
    prompter: &mut P,
    catalog: &Catalog,
) -> Result<CmdResult> {
    if catalog.is_empty() {
        let mut result = CmdResult::new(catalog.clone());
        result.add_message(CmdMessage::info("No commands to update"));
        return Ok(result);
    }

    let current = select_command(prompter, catalog, SELECT_LABEL)?;
    prompter.show_command(&current)?;

    let updated = prompt_fields(prompter, current.name.clone())?;
    let message = CmdMessage::success(format!("Command updated: {}", current.name));
    let mut result = persist(store, catalog.insert(updated))?.with_viewed(current);
    result.add_message(message);
    Ok(result)
}
