use crate::Nullable;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The `spec` of a Camel-K Kamelet. A Kamelet is a snippet of a Camel route, parameterized by the
/// properties described in its `definition`.
///
/// Every field is optional so that a server-side apply document only claims ownership of the
/// fields that were configured.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletSpec {
    /// The JSON-schema-like description of the Kamelet's parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<KameletDefinition>,
    /// Maven coordinates or Camel components the Kamelet depends on, e.g. `camel:timer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// Source code that implements the Kamelet in a language other than the route template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceSpec>>,
    /// The route template. This is open content interpreted by the Camel-K operator.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub template: Nullable<Map<String, Value>>,
    /// The route of Kamelets written before `template` existed. Deprecated in favor of
    /// `template`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub flow: Nullable<Map<String, Value>>,
    /// Authorization settings. The kind does not define any fields for it yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Map<String, Value>>,
    /// Data shapes consumed and produced by the Kamelet, keyed by event slot (`in`, `out`,
    /// `error`). Deprecated in favor of `data_types`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, EventTypeSpec>>,
    /// The data types supported by each event slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types: Option<BTreeMap<String, DataTypesSpec>>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletDefinition {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub example: Nullable<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Names of the properties that a binding must set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
pub struct ExternalDocumentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The schema of a single Kamelet property.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub default: Nullable<Value>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub example: Nullable<Value>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// UI hints for tooling, e.g. `urn:camel:group:credentials`.
    #[serde(rename = "x-descriptors", skip_serializing_if = "Option::is_none")]
    pub x_descriptors: Option<Vec<String>>,
}

/// A source file that is part of the Kamelet.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<String>>,
    #[serde(rename = "property-names", skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Vec<String>>,
}

/// The data shape of one event slot.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<KameletDefinition>,
}

/// The data types of one event slot.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataTypesSpec {
    /// The name of the data type used when a binding does not choose one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<BTreeMap<String, DataTypeSpec>>,
    /// Headers shared by every data type of the slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, HeaderSpec>>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeSpec {
    /// The scheme the data type belongs to, e.g. `camel` or `aws2-s3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, HeaderSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<KameletDefinition>,
}

/// A message header set or expected by a data type.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_not_sent() {
        let spec = KameletSpec {
            dependencies: Some(vec!["camel:timer".to_string()]),
            ..KameletSpec::default()
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({ "dependencies": ["camel:timer"] })
        );
    }

    #[test]
    fn wire_names() {
        let spec: KameletSpec = serde_json::from_value(json!({
            "definition": {
                "$schema": "http://json-schema.org/draft-07/schema#",
                "title": "Timer Source",
                "required": ["message"],
                "type": "object",
                "properties": {
                    "period": {
                        "type": "integer",
                        "default": 1000,
                        "x-descriptors": ["urn:alm:descriptor:com.tectonic.ui:number"]
                    }
                }
            },
            "sources": [{ "name": "source.groovy", "property-names": ["period"] }],
            "template": { "from": { "uri": "timer:tick" } },
            "types": { "out": { "mediaType": "text/plain" } }
        }))
        .unwrap();

        let definition = spec.definition.as_ref().unwrap();
        assert_eq!(definition.type_.as_deref(), Some("object"));
        assert!(definition.schema.is_some());
        let period = &definition.properties.as_ref().unwrap()["period"];
        assert_eq!(period.default.as_option(), Some(&json!(1000)));
        assert!(period.example.is_absent());
        assert_eq!(period.x_descriptors.as_ref().unwrap().len(), 1);
        assert_eq!(
            spec.sources.as_ref().unwrap()[0].property_names,
            Some(vec!["period".to_string()])
        );
        assert_eq!(
            spec.types.as_ref().unwrap()["out"].media_type.as_deref(),
            Some("text/plain")
        );
        assert!(spec.template.as_option().is_some());
    }

    #[test]
    fn data_types() {
        let spec: KameletSpec = serde_json::from_value(json!({
            "dataTypes": {
                "out": {
                    "default": "text",
                    "headers": { "CamelAwsS3Key": { "type": "string", "required": true } },
                    "types": {
                        "text": {
                            "scheme": "camel",
                            "format": "plain-text",
                            "mediaType": "text/plain",
                            "dependencies": ["camel:core"],
                            "schema": { "type": "string" }
                        }
                    }
                }
            }
        }))
        .unwrap();

        let out = &spec.data_types.as_ref().unwrap()["out"];
        assert_eq!(out.default.as_deref(), Some("text"));
        let header = &out.headers.as_ref().unwrap()["CamelAwsS3Key"];
        assert_eq!(header.type_.as_deref(), Some("string"));
        assert_eq!(header.required, Some(true));
        let text = &out.types.as_ref().unwrap()["text"];
        assert_eq!(text.scheme.as_deref(), Some("camel"));
        assert_eq!(text.media_type.as_deref(), Some("text/plain"));
        assert_eq!(
            text.schema.as_ref().unwrap().type_.as_deref(),
            Some("string")
        );
        assert_eq!(
            serde_json::to_value(&spec).unwrap()["dataTypes"]["out"]["types"]["text"]["mediaType"],
            "text/plain"
        );
    }

    #[test]
    fn flow() {
        let spec: KameletSpec = serde_json::from_value(json!({
            "flow": { "from": { "uri": "timer:tick" } }
        }))
        .unwrap();
        assert_eq!(
            spec.flow.as_option().unwrap()["from"]["uri"],
            json!("timer:tick")
        );
        assert!(spec.template.is_absent());

        let cleared: KameletSpec = serde_json::from_value(json!({ "flow": null })).unwrap();
        assert!(cleared.flow.is_null());
        assert_eq!(serde_json::to_value(&cleared).unwrap(), json!({ "flow": null }));
    }

    #[test]
    fn authorization() {
        let spec: KameletSpec = serde_json::from_value(json!({ "authorization": {} })).unwrap();
        assert_eq!(spec.authorization, Some(Map::new()));
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({ "authorization": {} })
        );
    }
}
