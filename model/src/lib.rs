/*!

This library provides the Camel-K Kamelet resource model and a synchronizer that keeps a Kamelet
in a Kubernetes cluster converged with its declarative configuration using server-side apply.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use identity::ResourceIdentity;
pub use kamelet::{
    DataTypeSpec, DataTypesSpec, EventTypeSpec, ExternalDocumentation, HeaderSpec,
    KameletDefinition, KameletSpec, PropertySchema, SourceSpec,
};
pub use manifest::{KameletManifest, KameletMetadata};
pub use nullable::Nullable;
pub use options::{ApplyOptions, ApplyOverrides, ProviderConfig};
use schemars::schema::RootSchema;
pub use state::{KameletConfig, KameletState, WaitCondition};

pub mod clients;
pub mod constants;
mod diagnostic;
mod error;
mod identity;
mod kamelet;
mod manifest;
mod nullable;
mod options;
mod state;

/// The JSON schema of a Kamelet configuration document, as accepted by
/// [`KameletSynchronizer::create`](clients::KameletSynchronizer::create).
pub fn configuration_schema() -> RootSchema {
    schemars::schema_for!(KameletConfig)
}

#[test]
fn configuration_schema_test() {
    let schema = serde_json::to_value(configuration_schema()).unwrap();
    let properties = schema.get("properties").unwrap();
    for field in ["metadata", "spec", "force_conflicts", "field_manager", "wait_for"] {
        assert!(properties.get(field).is_some(), "missing '{}'", field);
    }
}
