/*!

This test module provides a mock implementation of the [`DynamicClient`] that demonstrates what can
be done to test the synchronizer without Kubernetes.

!*/

pub(crate) mod dynamic_client;

use kamelet_model::{KameletConfig, KameletManifest, KameletMetadata, KameletSpec, Nullable};
use serde_json::{json, Map, Value};

/// A configuration for the Kamelet `name` in `namespace` with a route template of `{"a": "b"}`.
pub(crate) fn kamelet_config(namespace: &str, name: &str) -> KameletConfig {
    let template: Map<String, Value> = serde_json::from_value(json!({ "a": "b" })).unwrap();
    KameletConfig {
        manifest: KameletManifest {
            metadata: KameletMetadata {
                name: name.to_string(),
                namespace: namespace.to_string(),
                ..KameletMetadata::default()
            },
            spec: Some(KameletSpec {
                template: Nullable::Value(template),
                ..KameletSpec::default()
            }),
            ..KameletManifest::default()
        },
        ..KameletConfig::default()
    }
}
