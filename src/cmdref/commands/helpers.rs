use crate::catalog::Catalog;
use crate::commands::{CmdResult, COMMAND_LABEL, DESCRIPTION_LABEL, PLATFORM_LABEL};
use crate::error::{CmdrefError, Result};
use crate::model::Command;
use crate::prompt::Prompter;
use crate::store::CommandStore;
use tracing::info;

/// Asks for everything but the name, in the fixed order command, platform, description.
pub fn prompt_fields<P: Prompter>(prompter: &mut P, name: String) -> Result<Command> {
    let command = prompter.prompt_string(COMMAND_LABEL)?;
    let platform = prompter.prompt_string(PLATFORM_LABEL)?;
    let description = prompter.prompt_string(DESCRIPTION_LABEL)?;
    Ok(Command {
        name,
        command,
        platform,
        description,
    })
}

/// Picks one catalog entry by name.
pub fn select_command<P: Prompter>(
    prompter: &mut P,
    catalog: &Catalog,
    label: &str,
) -> Result<Command> {
    let selection = prompter.prompt_select(label, &catalog.names())?;
    catalog
        .lookup(&selection)
        .cloned()
        .ok_or_else(|| CmdrefError::Prompt(format!("'{}' is not in the catalog", selection)))
}

/// Writes the whole catalog and wraps it as the action's result.
pub fn persist<S: CommandStore>(store: &mut S, catalog: Catalog) -> Result<CmdResult> {
    store.save(&catalog.to_commands())?;
    info!(count = catalog.len(), "catalog persisted");
    let mut result = CmdResult::new(catalog);
    result.saved = true;
    Ok(result)
}
