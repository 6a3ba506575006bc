use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, CREATE_NAME_LABEL};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::CommandStore;

use super::helpers::{persist, prompt_fields};

pub fn run<S: CommandStore, P: Prompter>(
    store: &mut S,
    prompter: &mut P,
    catalog: &Catalog,
) -> Result<CmdResult> {
    let name = prompter.prompt_string(CREATE_NAME_LABEL)?;
    let replacing = catalog.contains(&name);
    let command = prompt_fields(prompter, name)?;
    let name = command.name.clone();

    let mut result = persist(store, catalog.insert(command))?;
    if replacing {
        result.add_message(CmdMessage::warning(format!("Command replaced: {}", name)));
    } else {
        result.add_message(CmdMessage::success(format!("Command saved: {}", name)));
    }
    Ok(result)
}
