use super::Prompter;
use crate::error::{CmdrefError, Result};
use crate::model::Command;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    Select(String),
}

/// Replays canned answers in order. Runs dry as a cancellation.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    shown: Vec<Command>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.answers.push_back(Answer::Text(value.into()));
        self
    }

    pub fn confirm(mut self, value: bool) -> Self {
        self.answers.push_back(Answer::Confirm(value));
        self
    }

    pub fn select(mut self, value: impl Into<String>) -> Self {
        self.answers.push_back(Answer::Select(value.into()));
        self
    }

    /// Labels of every prompt shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Commands presented through `show_command`, in order.
    pub fn shown(&self) -> &[Command] {
        &self.shown
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, label: &str) -> Result<Answer> {
        self.asked.push(label.to_string());
        self.answers.pop_front().ok_or(CmdrefError::PromptCancelled)
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_string(&mut self, label: &str) -> Result<String> {
        match self.next(label)? {
            Answer::Text(value) if !value.is_empty() => Ok(value),
            Answer::Text(_) => Err(CmdrefError::Prompt(format!("'{}' requires a value", label))),
            other => Err(CmdrefError::Prompt(format!(
                "expected text for '{}', script has {:?}",
                label, other
            ))),
        }
    }

    fn prompt_confirm(&mut self, label: &str) -> Result<bool> {
        match self.next(label)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(CmdrefError::Prompt(format!(
                "expected confirmation for '{}', script has {:?}",
                label, other
            ))),
        }
    }

    fn prompt_select(&mut self, label: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            return Err(CmdrefError::Prompt(format!(
                "Nothing to choose from for '{}'",
                label
            )));
        }
        match self.next(label)? {
            Answer::Select(value) if options.contains(&value) => Ok(value),
            Answer::Select(value) => Err(CmdrefError::Prompt(format!(
                "'{}' is not one of the options for '{}'",
                value, label
            ))),
            other => Err(CmdrefError::Prompt(format!(
                "expected selection for '{}', script has {:?}",
                label, other
            ))),
        }
    }

    fn show_command(&mut self, command: &Command) -> Result<()> {
        self.shown.push(command.clone());
        Ok(())
    }
}
