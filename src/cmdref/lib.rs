//! # Cmdref Architecture
//!
//! Cmdref keeps a personal reference of named shell commands in a single JSON file and lets
//! the user create, update, remove, view and import them from a menu. The library holds all
//! of the behaviour; the binary only wires a terminal and a file to it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, runs the menu loop, prints results     │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Action dispatcher: (catalog, action) -> CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per action, prompts then transforms          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Catalog (catalog.rs)    │  │  Ports (store/, prompt/)     │
//! │  - Pure name -> Command  │  │  - CommandStore, Prompter    │
//! │    map, merge rules      │  │  - file/terminal + test fakes│
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Catalog Values
//!
//! Catalog operations never modify their input. An action receives the current catalog by
//! reference and returns the next one inside its [`api::CmdResult`]; the caller swaps it in.
//!
//! ## Persistence
//!
//! Every mutating action rewrites the complete file. Writes go to a temp file that is renamed
//! over the old one, so a crash leaves either the previous or the new collection, never a mix.
//!
//! ## Testing Strategy
//!
//! 1. **Catalog**: property-style unit tests, no I/O at all.
//! 2. **Commands / API**: `InMemoryStore` + `ScriptedPrompter`, no terminal, no filesystem.
//! 3. **FileStore / CLI**: integration tests in `tests/` against a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The dispatcher facade
//! - [`catalog`]: The command map and its merge rules
//! - [`commands`]: One handler per menu action
//! - [`store`]: Persistence port and implementations
//! - [`prompt`]: Prompt port and implementations
//! - [`model`]: `Command` and `Action`
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod store;
