//! # Catalog
//!
//! The in-memory mapping of command name to [`Command`]. This is the only place that knows
//! how names collide, how entries are dropped and how an import is reconciled with what is
//! already stored.
//!
//! A `Catalog` is a value. Every transformation borrows the current catalog and hands back
//! a new one, so the dispatch loop can always swap "old catalog" for "new catalog" without
//! worrying about who else holds a reference:
//!
//! ```text
//! let next = current.insert(cmd);   // current is untouched
//! ```
//!
//! Nothing here touches the filesystem or the terminal. Persistence lives in
//! [`crate::store`], prompting in [`crate::prompt`].

use crate::model::Command;
use std::collections::BTreeMap;

/// How an incoming collection is reconciled with an existing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Union of both sides; incoming entries win on name collision.
    MergeOverwrite,
    /// The result is exactly the incoming collection, even when it is empty.
    ReplaceAll,
}

impl MergeMode {
    pub fn from_merge_flag(merge: bool) -> Self {
        if merge {
            MergeMode::MergeOverwrite
        } else {
            MergeMode::ReplaceAll
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, Command>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog keyed by name. Later duplicates replace earlier ones.
    pub fn from_commands<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        let entries = commands
            .into_iter()
            .map(|cmd| (cmd.name.clone(), cmd))
            .collect();
        Self { entries }
    }

    /// All entries, ordered by name.
    pub fn to_commands(&self) -> Vec<Command> {
        self.entries.values().cloned().collect()
    }

    pub fn insert(&self, command: Command) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(command.name.clone(), command);
        Self { entries }
    }

    pub fn delete(&self, name: &str) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(name);
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Sorted names, ready to be offered in a selection prompt.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn merge(&self, incoming: &Catalog, mode: MergeMode) -> Self {
        match mode {
            MergeMode::ReplaceAll => incoming.clone(),
            MergeMode::MergeOverwrite => {
                let mut entries = self.entries.clone();
                for (name, cmd) in &incoming.entries {
                    entries.insert(name.clone(), cmd.clone());
                }
                Self { entries }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Command> for Catalog {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self::from_commands(iter)
    }
}
