use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display(
        "Unexpected import identifier '{}', expected the format '{}'",
        input,
        expected
    ))]
    ImportFormat { input: String, expected: String },

    #[snafu(display("Invalid kamelet manifest: {}", what))]
    InvalidManifest { what: String },

    #[snafu(display("Unknown configuration field(s): {}", fields.join(", ")))]
    UnknownFields { fields: Vec<String> },

    #[snafu(display("Error serializing manifest to YAML: {}", source))]
    YamlSerialization { source: serde_yaml::Error },

    #[snafu(display("Unable to parse configuration YAML: {}", source))]
    YamlDeserialization { source: serde_yaml::Error },

    #[snafu(display("Unable to deserialize configuration: {}", source))]
    ConfigDeserialization { source: serde_json::Error },

    #[snafu(display("Unable to serialize configuration: {}", source))]
    ConfigSerialization { source: serde_json::Error },
}

impl Error {
    /// A short, human readable title for the error, used as a diagnostic summary.
    pub fn summary(&self) -> &'static str {
        match self.0 {
            OpaqueError::ImportFormat { .. } => "Error importing resource",
            OpaqueError::InvalidManifest { .. }
            | OpaqueError::UnknownFields { .. }
            | OpaqueError::YamlDeserialization { .. }
            | OpaqueError::ConfigDeserialization { .. } => "Invalid resource configuration",
            OpaqueError::YamlSerialization { .. } | OpaqueError::ConfigSerialization { .. } => {
                "Error marshalling resource"
            }
        }
    }
}
