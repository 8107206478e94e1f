/*!

This is the command line interface for keeping a Camel-K Kamelet in a Kubernetes cluster in sync
with a declarative configuration file. The state of the managed Kamelet is kept in a local state
file between invocations.

!*/

mod create;
mod delete;
mod import;
mod read;
mod schema;
mod state_file;
mod update;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use kamelet_model::clients::{KameletSynchronizer, KubeDynamicClient};
use kamelet_model::constants::DEFAULT_FIELD_MANAGER;
use kamelet_model::ProviderConfig;
use log::LevelFilter;
use std::path::PathBuf;

/// The command line interface for synchronizing a Camel-K Kamelet with server-side apply.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// Path to the kubeconfig file. Also can be passed with the KUBECONFIG environment variable.
    #[clap(long = "kubeconfig")]
    kubeconfig: Option<PathBuf>,
    /// Path to the file that holds the state of the managed Kamelet.
    #[clap(long = "state", default_value = "kamelet.state.json")]
    state: PathBuf,
    /// The field manager used for server-side apply unless the configuration sets `field_manager`.
    #[clap(long = "field-manager", default_value = DEFAULT_FIELD_MANAGER)]
    field_manager: String,
    /// Take ownership of conflicting fields unless the configuration sets `force_conflicts`.
    #[clap(long = "force-conflicts")]
    force_conflicts: bool,
    /// Do not contact a cluster. Only `import` and `schema` work offline.
    #[clap(long = "offline")]
    offline: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Create a Kamelet from a configuration file.
    Create(create::Create),
    /// Refresh the stored state from the cluster.
    Read(read::Read),
    /// Apply a changed configuration file to the managed Kamelet.
    Update(update::Update),
    /// Delete the managed Kamelet.
    Delete(delete::Delete),
    /// Start managing an existing Kamelet.
    Import(import::Import),
    /// Print the schema of the configuration file.
    Schema(schema::Schema),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        if let Some(sync_error) = e.downcast_ref::<kamelet_model::clients::Error>() {
            eprintln!("{}: {:#}", sync_error.diagnostic().summary, e);
        } else if let Some(model_error) = e.downcast_ref::<kamelet_model::Error>() {
            eprintln!("{}: {:#}", model_error.summary(), e);
        } else {
            eprintln!("{:#}", e);
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let provider_config = ProviderConfig {
        field_manager: args.field_manager,
        force_conflicts: args.force_conflicts,
        offline: args.offline,
    };
    let state = args.state;
    match args.command {
        Command::Schema(schema) => schema.run(),
        command => {
            let sync = synchronizer(provider_config, args.kubeconfig).await?;
            match command {
                Command::Create(create) => create.run(&sync, &state).await,
                Command::Read(read) => read.run(&sync, &state).await,
                Command::Update(update) => update.run(&sync, &state).await,
                Command::Delete(delete) => delete.run(&sync, &state).await,
                Command::Import(import) => import.run(&sync, &state).await,
                Command::Schema(schema) => schema.run(),
            }
        }
    }
}

/// Configure the synchronizer. No Kubernetes client is created when running offline.
async fn synchronizer(
    config: ProviderConfig,
    kubeconfig: Option<PathBuf>,
) -> Result<KameletSynchronizer> {
    if config.offline {
        return Ok(KameletSynchronizer::configure(config, None));
    }
    let client = match kubeconfig {
        Some(path) => KubeDynamicClient::new_from_kubeconfig_path(&path)
            .await
            .context(format!(
                "Unable to create Kubernetes client from path '{:?}'",
                path
            ))?,
        None => KubeDynamicClient::new()
            .await
            .context("Unable to create default Kubernetes client")?,
    };
    Ok(KameletSynchronizer::configure(config, Some(client)))
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate and the model.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("kamelet_model"), level)
                .init();
        }
    }
}
