use super::CommandStore;
use crate::error::{CmdrefError, Result};
use crate::model::Command;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    commands: Vec<Command>,
    external: HashMap<PathBuf, Vec<Command>>,
    save_count: usize,
    fail_next_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: Vec<Command>) -> Self {
        Self {
            commands,
            ..Self::default()
        }
    }

    /// Registers a collection that `load_external` will return for `path`.
    pub fn add_external(&mut self, path: impl Into<PathBuf>, commands: Vec<Command>) {
        self.external.insert(path.into(), commands);
    }

    /// The next `save` fails with an IO error and leaves the stored collection untouched.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl CommandStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Command>> {
        Ok(self.commands.clone())
    }

    fn load_external(&self, path: &Path) -> Result<Vec<Command>> {
        self.external.get(path).cloned().ok_or_else(|| {
            CmdrefError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no import source at {}", path.display()),
            ))
        })
    }

    fn save(&mut self, commands: &[Command]) -> Result<()> {
        if self.fail_next_save {
            self.fail_next_save = false;
            return Err(CmdrefError::Io(io::Error::other("simulated write failure")));
        }
        self.commands = commands.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn file_path(&self) -> PathBuf {
        PathBuf::from("memory://cmdref.json")
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::{sample_command, StoreFixture};
    use super::*;

    #[test]
    fn save_replaces_collection() {
        let mut store = StoreFixture::new().with_commands(&["a", "b"]).store;
        store.save(&[sample_command("c")]).unwrap();

        assert_eq!(store.load().unwrap(), vec![sample_command("c")]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn failed_save_keeps_previous_collection() {
        let mut store = StoreFixture::new().with_commands(&["a"]).store;
        store.fail_next_save();

        assert!(store.save(&[]).unwrap_err().is_persistence());
        assert_eq!(store.commands().len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn unknown_external_source_is_io_error() {
        let store = InMemoryStore::new();
        let err = store.load_external(Path::new("missing.json")).unwrap_err();
        assert!(matches!(err, CmdrefError::Io(_)));
    }
}
