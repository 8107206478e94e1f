use crate::state_file::{read_config, read_state, write_state};
use anyhow::{Context, Result};
use clap::Parser;
use kamelet_model::clients::KameletSynchronizer;
use std::path::{Path, PathBuf};

/// Apply a changed configuration file to the Kamelet recorded in the state file.
#[derive(Debug, Parser)]
pub(crate) struct Update {
    /// Path to the Kamelet configuration YAML file.
    #[clap(long = "file", short = 'f', parse(from_os_str))]
    file: PathBuf,
}

impl Update {
    pub(crate) async fn run(self, sync: &KameletSynchronizer, state_path: &Path) -> Result<()> {
        let prior = read_state(state_path)?;
        let config = read_config(&self.file)?;
        let state = sync
            .update(config, &prior)
            .await
            .context(format!("Unable to update kamelet '{}'", prior.id))?;
        write_state(state_path, &state)?;
        println!("Successfully updated kamelet '{}'.", state.id);
        Ok(())
    }
}
