use crate::state_file::{read_state, remove_state};
use anyhow::{Context, Result};
use clap::Parser;
use kamelet_model::clients::KameletSynchronizer;
use std::path::Path;

/// Delete the Kamelet recorded in the state file and remove the state file.
#[derive(Debug, Parser)]
pub(crate) struct Delete {}

impl Delete {
    pub(crate) async fn run(self, sync: &KameletSynchronizer, state_path: &Path) -> Result<()> {
        let state = read_state(state_path)?;
        sync.delete(&state)
            .await
            .context(format!("Unable to delete kamelet '{}'", state.id))?;
        remove_state(state_path)?;
        println!("Successfully deleted kamelet '{}'.", state.id);
        Ok(())
    }
}
