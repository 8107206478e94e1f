use crate::state_file::{ensure_no_state, read_config, write_state};
use anyhow::{Context, Result};
use clap::Parser;
use kamelet_model::clients::KameletSynchronizer;
use std::path::{Path, PathBuf};

/// Create a Kamelet from a configuration file and record its state.
#[derive(Debug, Parser)]
pub(crate) struct Create {
    /// Path to the Kamelet configuration YAML file.
    #[clap(long = "file", short = 'f', parse(from_os_str))]
    file: PathBuf,
}

impl Create {
    pub(crate) async fn run(self, sync: &KameletSynchronizer, state_path: &Path) -> Result<()> {
        ensure_no_state(state_path)?;
        let config = read_config(&self.file)?;
        let state = sync
            .create(config)
            .await
            .context("Unable to create kamelet")?;
        write_state(state_path, &state)?;
        println!("Successfully created kamelet '{}'.", state.id);
        Ok(())
    }
}
