//! # Prompt Port
//!
//! Handlers never talk to the terminal. They ask a [`Prompter`] for a string, a yes/no or
//! a choice among options, and get an answer or an error back.
//!
//! - [`terminal::TerminalPrompter`]: interactive prompts on the controlling terminal
//! - [`scripted::ScriptedPrompter`]: canned answers, for tests and non-interactive drivers
//!
//! A user aborting a prompt surfaces as
//! [`CmdrefError::PromptCancelled`](crate::error::CmdrefError::PromptCancelled).

use crate::error::Result;
use crate::model::Command;

pub mod scripted;
pub mod terminal;

pub trait Prompter {
    /// Ask for a non-empty string.
    fn prompt_string(&mut self, label: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn prompt_confirm(&mut self, label: &str) -> Result<bool>;

    /// Ask the user to pick one of `options`. The answer is always one of them.
    fn prompt_select(&mut self, label: &str, options: &[String]) -> Result<String>;

    /// Present a command to the user, e.g. before it gets edited.
    fn show_command(&mut self, command: &Command) -> Result<()>;
}
