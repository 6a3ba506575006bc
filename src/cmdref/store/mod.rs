//! # Storage Layer
//!
//! The [`CommandStore`] trait is the persistence port: the rest of cmdref loads and saves
//! whole command collections through it and never touches a file handle directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - A single JSON array at `<user-config-dir>/cmdref/cmdref.json`
//!   - Every save rewrites the whole file through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts saves and can be primed with external import sources
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {"name": "...", "command": "...", "platform": "...", "description": "..."},
//!   ...
//! ]
//! ```
//!
//! Field names and the array shape are shared with every other reader of the file, so they
//! never change. Entry order carries no meaning.

use crate::error::Result;
use crate::model::Command;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for command persistence.
pub trait CommandStore {
    /// Load the full collection from the default location.
    /// An absent or empty source is an empty collection, not an error.
    fn load(&self) -> Result<Vec<Command>>;

    /// Load a collection from an arbitrary location (an import source).
    fn load_external(&self, path: &Path) -> Result<Vec<Command>>;

    /// Replace the persisted collection with `commands`, all or nothing.
    fn save(&mut self, commands: &[Command]) -> Result<()>;

    /// Where the default collection lives.
    fn file_path(&self) -> PathBuf;
}
