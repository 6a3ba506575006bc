use crate::error::CmdrefError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named shell command. The `name` is the only identity field.
/// Hand-written files may leave out anything but the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub description: String,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        platform: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            platform: platform.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Command: {}", self.command)?;
        writeln!(f, "Description: {}", self.description)?;
        write!(f, "Platform: {}", self.platform)
    }
}

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Remove,
    View,
    Import,
    Exit,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 6] = [
        Action::Create,
        Action::Update,
        Action::Remove,
        Action::View,
        Action::Import,
        Action::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Update => "Update",
            Action::Remove => "Remove",
            Action::View => "View",
            Action::Import => "Import",
            Action::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }

    /// Actions that may change the catalog and therefore end in a save.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Action::Create | Action::Update | Action::Remove | Action::Import
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = CmdrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|a| a.label() == s)
            .copied()
            .ok_or_else(|| CmdrefError::UnrecognizedAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_label() {
        for action in Action::ALL {
            assert_eq!(action.label().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn rejects_unknown_label() {
        let err = "Rename".parse::<Action>().unwrap_err();
        assert!(matches!(err, CmdrefError::UnrecognizedAction(ref s) if s == "Rename"));
    }

    #[test]
    fn labels_follow_menu_order() {
        assert_eq!(
            Action::labels(),
            vec!["Create", "Update", "Remove", "View", "Import", "Exit"]
        );
    }

    #[test]
    fn exit_and_view_do_not_mutate() {
        assert!(!Action::Exit.is_mutating());
        assert!(!Action::View.is_mutating());
        assert!(Action::Import.is_mutating());
    }

    #[test]
    fn display_lists_fields() {
        let cmd = Command::new("list", "ls -la", "linux", "long listing");
        let shown = cmd.to_string();
        assert!(shown.contains("Name: list"));
        assert!(shown.contains("Command: ls -la"));
        assert!(shown.contains("Description: long listing"));
        assert!(shown.contains("Platform: linux"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let cmd: Command = serde_json::from_str(r#"{"name":"a","description":"d"}"#).unwrap();
        assert_eq!(cmd, Command::new("a", "", "", "d"));
    }

    #[test]
    fn deserializes_storage_shape() {
        let json = r#"{"name":"a","command":"b","platform":"c","description":"d","extra":1}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(cmd, Command::new("a", "b", "c", "d"));
    }
}
