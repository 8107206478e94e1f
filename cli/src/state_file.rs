use anyhow::{Context, Result};
use kamelet_model::{KameletConfig, KameletState};
use log::debug;
use std::fs;
use std::path::Path;

/// Read a Kamelet configuration from a YAML file. Unknown keys are an error.
pub(crate) fn read_config(path: &Path) -> Result<KameletConfig> {
    let data = fs::read_to_string(path).context(format!("Unable to read file '{:?}'", path))?;
    KameletConfig::from_yaml(&data)
        .context(format!("Unable to deserialize configuration file '{:?}'", path))
}

pub(crate) fn read_state(path: &Path) -> Result<KameletState> {
    let data =
        fs::read_to_string(path).context(format!("Unable to read state file '{:?}'", path))?;
    serde_json::from_str(&data).context(format!("Unable to deserialize state file '{:?}'", path))
}

pub(crate) fn write_state(path: &Path, state: &KameletState) -> Result<()> {
    let data = serde_json::to_string_pretty(state).context("Unable to serialize state")?;
    fs::write(path, data).context(format!("Unable to write state file '{:?}'", path))?;
    debug!("wrote state of kamelet '{}' to '{:?}'", state.id, path);
    Ok(())
}

/// Remove the state file. A missing state file is not an error.
pub(crate) fn remove_state(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            Err(e).context(format!("Unable to remove state file '{:?}'", path))
        }
        _ => Ok(()),
    }
}

/// Fail if a state file already exists so that an existing resource is never silently forgotten.
pub(crate) fn ensure_no_state(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "State file '{:?}' already exists, use 'update' or remove the state file first",
            path
        );
    }
    Ok(())
}
