use crate::constants::{API_VERSION, KIND};
use crate::error::{self, Result};
use crate::{KameletSpec, ResourceIdentity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::collections::BTreeMap;

/// The Kamelet document exchanged with the API server. `api_version` and `kind` are present so that
/// a manifest file can be written the way `kubectl` expects, but they are overwritten with
/// [`API_VERSION`] and [`KIND`] before every write.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: KameletMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<KameletSpec>,
}

/// The subset of `ObjectMeta` that is configurable. Server-populated fields such as `uid` or
/// `managedFields` are dropped when a response is decoded.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
pub struct KameletMetadata {
    /// The name of the Kamelet. Required.
    #[serde(default)]
    pub name: String,
    /// The namespace of the Kamelet. Required.
    #[serde(default)]
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl KameletMetadata {
    pub fn new(identity: &ResourceIdentity) -> Self {
        Self {
            name: identity.name().to_string(),
            namespace: identity.namespace().to_string(),
            ..Self::default()
        }
    }

    /// The identity of the Kamelet. Fails if either `name` or `namespace` is empty.
    pub fn identity(&self) -> Result<ResourceIdentity> {
        ResourceIdentity::new(self.namespace.as_str(), self.name.as_str())
    }
}

impl KameletManifest {
    /// Create a manifest with the fixed type information already set.
    pub fn new(identity: &ResourceIdentity, spec: KameletSpec) -> Self {
        Self {
            metadata: KameletMetadata::new(identity),
            spec: Some(spec),
            ..Self::default()
        }
        .with_type_meta()
    }

    /// Replace whatever `apiVersion` and `kind` were configured with the Kamelet constants.
    pub fn with_type_meta(mut self) -> Self {
        self.api_version = Some(API_VERSION.to_string());
        self.kind = Some(KIND.to_string());
        self
    }

    pub fn identity(&self) -> Result<ResourceIdentity> {
        self.metadata.identity()
    }

    /// Returns this object's YAML representation as a String.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).context(error::YamlSerializationSnafu)?)
    }
}
