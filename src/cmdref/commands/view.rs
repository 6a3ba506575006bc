use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::Prompter;

use super::helpers::select_command;

pub const SELECT_LABEL: &str = "Select a command";

pub fn run<P: Prompter>(prompter: &mut P, catalog: &Catalog) -> Result<CmdResult> {
    let mut result = CmdResult::new(catalog.clone());
    if catalog.is_empty() {
        result.add_message(CmdMessage::info("No existing commands found"));
        return Ok(result);
    }

    let command = select_command(prompter, catalog, SELECT_LABEL)?;
    prompter.show_command(&command)?;
    Ok(result.with_viewed(command))
}
