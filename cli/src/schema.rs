use anyhow::{Context, Result};
use clap::Parser;

/// Print the JSON schema of the Kamelet configuration file.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    /// Print the schema as JSON instead of YAML.
    #[clap(long = "json")]
    json: bool,
}

impl Schema {
    pub(crate) fn run(self) -> Result<()> {
        let schema = kamelet_model::configuration_schema();
        let output = if self.json {
            serde_json::to_string_pretty(&schema).context("Unable to serialize schema")?
        } else {
            serde_yaml::to_string(&schema).context("Unable to serialize schema")?
        };
        println!("{}", output);
        Ok(())
    }
}
