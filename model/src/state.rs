use crate::error::{self, Result};
use crate::{ApplyOverrides, KameletManifest, KameletMetadata, KameletSpec, ResourceIdentity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use snafu::{ensure, ResultExt};

/// A condition that a caller may block on after a write. Conditions are stored with the state but
/// never evaluated by the synchronizer.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
pub struct WaitCondition {
    /// The JSONPath expression to evaluate on the live object, e.g. `.status.phase`.
    pub jsonpath: String,
    /// The value the expression must produce.
    pub value: String,
    /// How long to wait, e.g. `30s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// The declarative configuration of one Kamelet: the manifest plus the per-resource settings that
/// are not sent to the API server.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
pub struct KameletConfig {
    /// Overrides the provider's `force_conflicts` setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_conflicts: Option<bool>,
    /// Overrides the provider's `field_manager` setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<Vec<WaitCondition>>,
    #[serde(flatten)]
    pub manifest: KameletManifest,
}

impl KameletConfig {
    /// Parse a configuration document written in YAML. See [`KameletConfig::from_value`].
    pub fn from_yaml(data: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(data).context(error::YamlDeserializationSnafu)?;
        Self::from_value(value)
    }

    /// Parse a configuration document. Unlike plain deserialization, keys that are not part of
    /// the configuration are rejected instead of dropped, so a misspelled field can never shrink
    /// the applied document.
    pub fn from_value(value: Value) -> Result<Self> {
        let config: Self =
            serde_json::from_value(value.clone()).context(error::ConfigDeserializationSnafu)?;
        let known = serde_json::to_value(&config).context(error::ConfigSerializationSnafu)?;
        let mut fields = Vec::new();
        unknown_fields(&value, &known, "", &mut fields);
        ensure!(fields.is_empty(), error::UnknownFieldsSnafu { fields });
        Ok(config)
    }

    pub fn overrides(&self) -> ApplyOverrides {
        ApplyOverrides {
            field_manager: self.field_manager.clone(),
            force_conflicts: self.force_conflicts,
        }
    }

    pub fn identity(&self) -> Result<ResourceIdentity> {
        self.manifest.identity()
    }
}

/// Collect the paths of keys in `input` that did not survive deserialization into `known`. Keys
/// set to `null` are skipped since an unset optional field is serialized the same way.
fn unknown_fields(input: &Value, known: &Value, path: &str, fields: &mut Vec<String>) {
    match (input, known) {
        (Value::Object(input), Value::Object(known)) => {
            for (key, value) in input {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                match known.get(key) {
                    Some(known) => unknown_fields(value, known, &child, fields),
                    None if value.is_null() => {}
                    None => fields.push(child),
                }
            }
        }
        (Value::Array(input), Value::Array(known)) => {
            for (index, (value, known)) in input.iter().zip(known).enumerate() {
                unknown_fields(value, known, &format!("{}[{}]", path, index), fields);
            }
        }
        _ => {}
    }
}

/// The persisted state of one Kamelet. A new value replaces the previous one after every
/// successful operation.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
pub struct KameletState {
    /// `name/namespace`, see [`ResourceIdentity::id`].
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_conflicts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for: Option<Vec<WaitCondition>>,
    pub metadata: KameletMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<KameletSpec>,
}

impl KameletState {
    /// The state seeded by an import. Only the identity is known until the next read.
    pub fn placeholder(identity: &ResourceIdentity) -> Self {
        Self {
            id: identity.id(),
            metadata: KameletMetadata::new(identity),
            ..Self::default()
        }
    }

    pub fn identity(&self) -> Result<ResourceIdentity> {
        self.metadata.identity()
    }

    pub fn overrides(&self) -> ApplyOverrides {
        ApplyOverrides {
            field_manager: self.field_manager.clone(),
            force_conflicts: self.force_conflicts,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_flattens_manifest() {
        let config: KameletConfig = serde_json::from_value(json!({
            "force_conflicts": true,
            "wait_for": [{ "jsonpath": ".status.phase", "value": "Ready", "timeout": "30s" }],
            "apiVersion": "camel.apache.org/v1alpha1",
            "kind": "Kamelet",
            "metadata": { "name": "x", "namespace": "ns" },
            "spec": { "template": { "a": "b" } }
        }))
        .unwrap();
        assert_eq!(config.identity().unwrap().id(), "x/ns");
        assert_eq!(config.overrides().force_conflicts, Some(true));
        assert_eq!(config.overrides().field_manager, None);
        assert_eq!(config.wait_for.as_ref().unwrap()[0].value, "Ready");
        assert!(config.manifest.spec.unwrap().template.as_option().is_some());
    }

    #[test]
    fn placeholder_has_identity_only() {
        let identity = ResourceIdentity::parse_import_id("ns/x").unwrap();
        let state = KameletState::placeholder(&identity);
        assert_eq!(state.id, "x/ns");
        assert_eq!(state.identity().unwrap(), identity);
        assert!(state.spec.is_none());
        assert_eq!(state.overrides(), ApplyOverrides::default());
    }

    #[test]
    fn misspelled_fields_are_rejected() {
        let err = KameletConfig::from_yaml(
            r#"
field_manger: someone
metadata:
  name: x
  namespace: ns
  lables:
    team: integration
spec:
  tempalte:
    from:
      uri: "timer:tick"
  sources:
    - name: source.groovy
      langauge: groovy
"#,
        )
        .unwrap_err();
        assert_eq!(err.summary(), "Invalid resource configuration");
        let message = err.to_string();
        for field in [
            "field_manger",
            "metadata.lables",
            "spec.tempalte",
            "spec.sources[0].langauge",
        ] {
            assert!(message.contains(field), "'{}' not in: {}", field, message);
        }
    }

    #[test]
    fn known_fields_are_accepted() {
        let config = KameletConfig::from_value(json!({
            "field_manager": "someone",
            "wait_for": null,
            "apiVersion": "camel.apache.org/v1alpha1",
            "kind": "Kamelet",
            "metadata": { "name": "x", "namespace": "ns", "labels": { "team": "integration" } },
            "spec": {
                "template": { "from": { "uri": "timer:tick", "anything": { "goes": true } } },
                "flow": null,
                "dependencies": null,
                "definition": {
                    "properties": { "period": { "type": "integer", "default": 1000 } }
                },
                "dataTypes": { "out": { "default": "text" } }
            }
        }))
        .unwrap();
        assert_eq!(config.field_manager.as_deref(), Some("someone"));
        let spec = config.manifest.spec.unwrap();
        assert!(spec.flow.is_null());
        assert!(spec.data_types.is_some());
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = KameletConfig::from_yaml("metadata: [").unwrap_err();
        assert_eq!(err.summary(), "Invalid resource configuration");
        let err = KameletConfig::from_yaml("metadata: 3").unwrap_err();
        assert_eq!(err.summary(), "Invalid resource configuration");
    }
}
