//! # API Facade
//!
//! The API layer is the action dispatcher. It owns the two ports (a [`CommandStore`] and a
//! [`Prompter`]) and turns `(current catalog, action)` into a [`CmdResult`] holding the next
//! catalog.
//!
//! ## Dispatch Loop
//!
//! ```text
//! catalog = api.load()
//! loop {
//!     action = api.select_action()
//!     result = api.dispatch(&catalog, action)?   // prompts, transforms, saves
//!     catalog = result.catalog
//!     if result.finished { break }
//! }
//! ```
//!
//! Each iteration is stateless: everything an action needs is the catalog passed in and the
//! answers it collects. Any port error aborts the action and is returned untouched; the
//! caller decides whether to keep going (the CLI does not).
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `catalog.rs`
//! - **Terminal output**: No stdout or stderr, results carry messages instead
//! - **Retries**: A failed prompt or save is surfaced, never repeated

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::Action;
use crate::prompt::Prompter;
use crate::store::CommandStore;
use std::path::PathBuf;
use tracing::debug;

pub const ACTION_LABEL: &str = "Select action";
pub const EMPTY_NOTICE: &str = "No commands stored";
pub const FIRST_RUN_LABEL: &str = "Store new command?";

pub struct CmdrefApi<S: CommandStore, P: Prompter> {
    store: S,
    prompter: P,
    import_source: Option<commands::ImportSource>,
}

impl<S: CommandStore, P: Prompter> CmdrefApi<S, P> {
    pub fn new(store: S, prompter: P) -> Self {
        Self {
            store,
            prompter,
            import_source: None,
        }
    }

    /// Preset the source used by every Import action.
    pub fn with_import_source(mut self, source: commands::ImportSource) -> Self {
        self.import_source = Some(source);
        self
    }

    pub fn load(&self) -> Result<Catalog> {
        let catalog = Catalog::from_commands(self.store.load()?);
        debug!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Offers a Create before the menu when nothing is stored yet. A declined offer, or a
    /// catalog that already has entries, hands the catalog back untouched and saves nothing.
    pub fn first_run(&mut self, catalog: &Catalog) -> Result<CmdResult> {
        if !catalog.is_empty() || !self.prompter.prompt_confirm(FIRST_RUN_LABEL)? {
            return Ok(CmdResult::new(catalog.clone()));
        }
        self.create(catalog)
    }

    pub fn select_action(&mut self) -> Result<Action> {
        let label = self.prompter.prompt_select(ACTION_LABEL, &Action::labels())?;
        label.parse()
    }

    pub fn dispatch(&mut self, catalog: &Catalog, action: Action) -> Result<CmdResult> {
        debug!(%action, mutating = action.is_mutating(), "dispatching");
        match action {
            Action::Create => self.create(catalog),
            Action::Update => self.update(catalog),
            Action::Remove => self.remove(catalog),
            Action::View => self.view(catalog),
            Action::Import => self.import(catalog),
            Action::Exit => Ok(CmdResult::new(catalog.clone()).finished()),
        }
    }

    pub fn create(&mut self, catalog: &Catalog) -> Result<CmdResult> {
        commands::create::run(&mut self.store, &mut self.prompter, catalog)
    }

    pub fn update(&mut self, catalog: &Catalog) -> Result<CmdResult> {
        commands::update::run(&mut self.store, &mut self.prompter, catalog)
    }

    pub fn remove(&mut self, catalog: &Catalog) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, &mut self.prompter, catalog)
    }

    pub fn view(&mut self, catalog: &Catalog) -> Result<CmdResult> {
        commands::view::run(&mut self.prompter, catalog)
    }

    pub fn import(&mut self, catalog: &Catalog) -> Result<CmdResult> {
        commands::import::run(
            &mut self.store,
            &mut self.prompter,
            catalog,
            self.import_source.as_ref(),
        )
    }

    pub fn file_path(&self) -> PathBuf {
        self.store.file_path()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}

pub use commands::{CmdMessage, CmdResult, ImportSource, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmdrefError;
    use crate::model::Command;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    type TestApi = CmdrefApi<InMemoryStore, ScriptedPrompter>;

    fn api(store: InMemoryStore, prompter: ScriptedPrompter) -> TestApi {
        CmdrefApi::new(store, prompter)
    }

    #[test]
    fn loads_catalog_keyed_by_name() {
        let store = StoreFixture::new().with_commands(&["a", "b"]).store;
        let catalog = api(store, ScriptedPrompter::new()).load().unwrap();
        assert_eq!(catalog.names(), vec!["a", "b"]);
    }

    #[test]
    fn selects_action_from_menu() {
        let mut api = api(InMemoryStore::new(), ScriptedPrompter::new().select("Import"));
        assert_eq!(api.select_action().unwrap(), Action::Import);
        assert_eq!(api.prompter().asked(), &[ACTION_LABEL]);
    }

    #[test]
    fn first_run_accepted_creates_and_saves() {
        let prompter = ScriptedPrompter::new()
            .confirm(true)
            .text("ls")
            .text("ls -la")
            .text("linux")
            .text("list");
        let mut api = api(InMemoryStore::new(), prompter);

        let result = api.first_run(&Catalog::new()).unwrap();

        assert_eq!(result.catalog.names(), vec!["ls"]);
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.prompter().asked()[0], FIRST_RUN_LABEL);
    }

    #[test]
    fn first_run_declined_saves_nothing() {
        let mut api = api(InMemoryStore::new(), ScriptedPrompter::new().confirm(false));

        let result = api.first_run(&Catalog::new()).unwrap();

        assert!(result.catalog.is_empty());
        assert!(!result.saved);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn first_run_skipped_when_catalog_has_entries() {
        let store = StoreFixture::new().with_commands(&["a"]).store;
        let mut api = api(store, ScriptedPrompter::new());
        let catalog = api.load().unwrap();

        let result = api.first_run(&catalog).unwrap();

        assert_eq!(result.catalog, catalog);
        assert!(api.prompter().asked().is_empty());
    }

    #[test]
    fn exit_finishes_without_saving() {
        let store = StoreFixture::new().with_commands(&["a"]).store;
        let mut api = api(store, ScriptedPrompter::new());
        let catalog = api.load().unwrap();

        let result = api.dispatch(&catalog, Action::Exit).unwrap();

        assert!(result.finished);
        assert_eq!(result.catalog, catalog);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn create_dispatches_and_persists() {
        let prompter = ScriptedPrompter::new().text("n").text("c").text("p").text("d");
        let mut api = api(InMemoryStore::new(), prompter);

        let result = api.dispatch(&Catalog::new(), Action::Create).unwrap();

        assert_eq!(result.catalog.lookup("n"), Some(&Command::new("n", "c", "p", "d")));
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn view_never_saves() {
        let store = StoreFixture::new().with_commands(&["a"]).store;
        let mut api = api(store, ScriptedPrompter::new().select("a"));
        let catalog = api.load().unwrap();

        let result = api.dispatch(&catalog, Action::View).unwrap();

        assert!(result.viewed.is_some());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn remove_on_empty_catalog_is_not_an_error() {
        let mut api = api(InMemoryStore::new(), ScriptedPrompter::new());
        let result = api.dispatch(&Catalog::new(), Action::Remove).unwrap();

        assert!(result.catalog.is_empty());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn preset_import_source_skips_prompts() {
        let store = StoreFixture::new()
            .with_commands(&["cmd1"])
            .with_external("in.json", &["cmd2"])
            .store;
        let mut api = api(store, ScriptedPrompter::new())
            .with_import_source(ImportSource::new("in.json", false));
        let catalog = api.load().unwrap();

        let result = api.dispatch(&catalog, Action::Import).unwrap();

        assert_eq!(result.catalog.names(), vec!["cmd2"]);
        assert!(api.prompter().asked().is_empty());
    }

    #[test]
    fn loop_threads_catalog_between_actions() {
        let prompter = ScriptedPrompter::new()
            .select("Create")
            .text("one")
            .text("echo 1")
            .text("sh")
            .text("first")
            .select("Remove")
            .select("one")
            .confirm(true)
            .select("Exit");
        let mut api = api(InMemoryStore::new(), prompter);
        let mut catalog = api.load().unwrap();

        loop {
            let action = api.select_action().unwrap();
            let result = api.dispatch(&catalog, action).unwrap();
            catalog = result.catalog;
            if result.finished {
                break;
            }
        }

        assert!(catalog.is_empty());
        assert_eq!(api.store().save_count(), 2);
        assert_eq!(api.prompter().remaining(), 0);
    }

    #[test]
    fn prompt_errors_surface_unchanged() {
        let mut api = api(InMemoryStore::new(), ScriptedPrompter::new());
        let err = api.dispatch(&Catalog::new(), Action::Create).unwrap_err();
        assert!(matches!(err, CmdrefError::PromptCancelled));
    }
}
