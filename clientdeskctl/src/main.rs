//! # clientdeskctl
//!
//! Command-line front end for the client table: print the table for a tab,
//! edit the multi-key sort interactively, and persist the applied sort
//! between runs.

use anyhow::Context;
use clap::{Parser, Subcommand};
use clientdesk_config::{Config, ConfigLoad, ConfigLoader, ConfigWarnings, StorageBackend};
use clientdesk_core::{
    persistence::{JsonFileStore, KeyValueStore, MemoryStore, SortStateRepository},
    query::ClientTab,
    records::load_or_sample,
    table::{ClientTableController, TableIntent},
};
use std::{io, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{
    render::{render_fields, render_view},
    run_session,
};

type Store = Box<dyn KeyValueStore>;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "clientdeskctl", version)]
#[command(about = "Browse the client table with multi-key sorting")]
struct Cli {
    /// Path to clientdesk.toml (defaults to ./clientdesk.toml or config/clientdesk.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Sort state file (overrides config; implies the file backend)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// JSON array of client records (overrides config)
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the table once, sorted by the saved rule set
    Show {
        /// Tab to show: all, individual or company
        #[arg(long)]
        tab: Option<ClientTab>,
    },
    /// List the sortable fields
    Fields,
    /// Read table commands from stdin, one per line
    Session,
    /// Remove the saved sort state
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,clientdesk_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Show { tab } => {
            let mut controller = open_table(&config)?;
            if let Some(tab) = tab {
                controller.dispatch(TableIntent::ChangeTab(tab));
            }
            print!("{}", render_view(controller.state()));
        }
        Command::Fields => {
            print!("{}", render_fields(&config.table.offered_fields));
        }
        Command::Session => {
            let mut controller = open_table(&config)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut controller, stdin.lock(), &mut stdout)?;
        }
        Command::Reset => {
            let mut repository = open_repository(&config)?;
            repository
                .clear()
                .context("failed to clear persisted sort state")?;
            println!("Cleared saved sort state");
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;
    log_warnings(&warnings);

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &cli.storage {
        config.storage.backend = StorageBackend::File;
        config.storage.path = path.clone();
    }
    if let Some(path) = &cli.records {
        config.records.source = Some(path.clone());
    }

    Ok(config)
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}

fn open_repository(config: &Config) -> anyhow::Result<SortStateRepository<Store>> {
    let store: Store = match config.storage.backend {
        StorageBackend::File => Box::new(JsonFileStore::open(&config.storage.path).with_context(
            || format!("failed to open sort state {}", config.storage.path.display()),
        )?),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    Ok(SortStateRepository::with_keys(
        store,
        config.storage.keys.clone(),
    ))
}

fn open_table(config: &Config) -> anyhow::Result<ClientTableController<Store>> {
    let records = load_or_sample(config.records.source.as_deref()).with_context(|| {
        match &config.records.source {
            Some(path) => format!("failed to load client records from {}", path.display()),
            None => "failed to load sample client records".to_string(),
        }
    })?;
    let repository = open_repository(config)?;
    Ok(ClientTableController::hydrate(
        records,
        repository,
        config.table.options(),
    ))
}
