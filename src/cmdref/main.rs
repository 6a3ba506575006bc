use clap::Parser;
use cmdref::api::{CmdMessage, CmdrefApi, ImportSource, EMPTY_NOTICE};
use cmdref::config::CmdrefConfig;
use cmdref::error::Result;
use cmdref::prompt::terminal::TerminalPrompter;
use cmdref::store::fs::{self, FileStore};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
mod print;
use args::Cli;
use print::{print_file_path, print_messages};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with menu output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_store(cli: &Cli) -> Result<FileStore> {
    if let Some(path) = &cli.file {
        return Ok(FileStore::new(path.clone()));
    }

    let dir = fs::default_dir()?;
    let config = CmdrefConfig::load(&dir)?;
    debug!(?config, dir = %dir.display(), "configuration loaded");
    Ok(FileStore::new(config.data_path(&dir)).with_pretty_json(config.pretty_json))
}

fn run(cli: Cli) -> Result<()> {
    let store = init_store(&cli)?;
    let mut api = CmdrefApi::new(store, TerminalPrompter::new());
    if let Some(path) = &cli.import {
        api = api.with_import_source(ImportSource::new(path.clone(), cli.merge));
    }

    print_file_path(&api.file_path());
    if cli.path {
        return Ok(());
    }

    let mut catalog = api.load()?;
    if catalog.is_empty() {
        print_messages(&[CmdMessage::info(EMPTY_NOTICE)]);
        let result = api.first_run(&catalog)?;
        print_messages(&result.messages);
        catalog = result.catalog;
    }

    loop {
        let action = api.select_action()?;
        let result = api.dispatch(&catalog, action)?;
        print_messages(&result.messages);
        catalog = result.catalog;
        if result.finished {
            return Ok(());
        }
    }
}
