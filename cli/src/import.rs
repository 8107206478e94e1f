use crate::state_file::{ensure_no_state, write_state};
use anyhow::{Context, Result};
use clap::Parser;
use kamelet_model::clients::KameletSynchronizer;
use log::info;
use std::path::Path;

/// Start managing an existing Kamelet. Unless `--offline` is set, the state is read from the
/// cluster right away.
#[derive(Debug, Parser)]
pub(crate) struct Import {
    /// The Kamelet to import, in the format `namespace/name`.
    import_id: String,
}

impl Import {
    pub(crate) async fn run(self, sync: &KameletSynchronizer, state_path: &Path) -> Result<()> {
        ensure_no_state(state_path)?;
        let mut state = sync
            .import(&self.import_id)
            .context(format!("Unable to import '{}'", self.import_id))?;
        if sync.config().offline {
            info!("Offline, kamelet '{}' will be read later", state.id);
        } else {
            state = sync
                .read(&state)
                .await
                .context(format!("Unable to read kamelet '{}'", state.id))?;
        }
        write_state(state_path, &state)?;
        println!("Successfully imported kamelet '{}'.", state.id);
        Ok(())
    }
}
