use crate::state_file::{read_state, remove_state, write_state};
use anyhow::{Context, Result};
use clap::Parser;
use kamelet_model::clients::{AllowNotFound, KameletSynchronizer};
use log::warn;
use std::path::Path;

/// Refresh the state file from the cluster and print the result.
#[derive(Debug, Parser)]
pub(crate) struct Read {
    /// Print the state as YAML instead of JSON.
    #[clap(long = "yaml")]
    yaml: bool,
}

impl Read {
    pub(crate) async fn run(self, sync: &KameletSynchronizer, state_path: &Path) -> Result<()> {
        let prior = read_state(state_path)?;
        let refreshed = sync
            .read(&prior)
            .await
            .allow_not_found(|_| ())
            .context(format!("Unable to read kamelet '{}'", prior.id))?;
        let state = match refreshed {
            Some(state) => state,
            None => {
                // The object is gone, so it is no longer managed.
                warn!(
                    "Kamelet '{}' no longer exists, removing it from '{:?}'",
                    prior.id, state_path
                );
                return remove_state(state_path);
            }
        };
        write_state(state_path, &state)?;
        if self.yaml {
            println!(
                "{}",
                serde_yaml::to_string(&state).context("Unable to serialize state")?
            );
        } else {
            println!(
                "{}",
                serde_json::to_string_pretty(&state).context("Unable to serialize state")?
            );
        }
        Ok(())
    }
}
