use crate::catalog::{Catalog, MergeMode};
use crate::model::Command;
use std::path::PathBuf;

pub mod create;
pub mod helpers;
pub mod import;
pub mod remove;
pub mod update;
pub mod view;

pub const CREATE_NAME_LABEL: &str = "Command name";
pub const COMMAND_LABEL: &str = "Command";
pub const PLATFORM_LABEL: &str = "Platform";
pub const DESCRIPTION_LABEL: &str = "Description";

/// Where an import reads from and how it is reconciled with the current catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSource {
    pub path: PathBuf,
    pub mode: MergeMode,
}

impl ImportSource {
    pub fn new(path: impl Into<PathBuf>, merge: bool) -> Self {
        Self {
            path: path.into(),
            mode: MergeMode::from_merge_flag(merge),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What one action produced. `catalog` replaces the caller's catalog.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub catalog: Catalog,
    pub viewed: Option<Command>,
    pub saved: bool,
    pub finished: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_viewed(mut self, command: Command) -> Self {
        self.viewed = Some(command);
        self
    }

    pub fn finished(mut self) -> Self {
        self.finished = true;
        self
    }
}
