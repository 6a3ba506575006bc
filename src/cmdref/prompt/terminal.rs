use super::Prompter;
use crate::error::{CmdrefError, Result};
use crate::model::Command;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::io;

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

fn with_colon(label: &str) -> String {
    if label.ends_with(':') {
        label.to_string()
    } else {
        format!("{}:", label)
    }
}

fn map_dialoguer(err: dialoguer::Error) -> CmdrefError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            CmdrefError::PromptCancelled
        }
        other => CmdrefError::Prompt(other.to_string()),
    }
}

impl Prompter for TerminalPrompter {
    fn prompt_string(&mut self, label: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(with_colon(label))
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Value is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(map_dialoguer)
    }

    fn prompt_confirm(&mut self, label: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(false)
            .interact_opt()
            .map_err(map_dialoguer)?
            .ok_or(CmdrefError::PromptCancelled)
    }

    fn prompt_select(&mut self, label: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            return Err(CmdrefError::Prompt(format!(
                "Nothing to choose from for '{}'",
                label
            )));
        }
        let index = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(map_dialoguer)?
            .ok_or(CmdrefError::PromptCancelled)?;
        options
            .get(index)
            .cloned()
            .ok_or_else(|| CmdrefError::Prompt(format!("Selection {} out of range", index)))
    }

    fn show_command(&mut self, command: &Command) -> Result<()> {
        println!("\n{}\n", command);
        Ok(())
    }
}
