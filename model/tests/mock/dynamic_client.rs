use kamelet_model::clients::DynamicClient;
use kamelet_model::ResourceIdentity;
use kube::api::{DynamicObject, PatchParams};
use kube::core::ErrorResponse;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// The label that the mock API server adds to every object it stores, the way an admission
/// webhook or a defaulting rule would.
pub(crate) const SERVER_LABEL: &str = "camel.apache.org/kamelet.bundled";

/// A [`DynamicClient`] backed by an in-memory map so that we can test without Kubernetes.
///
/// Applies replace the stored object, record the field manager that owns it, and mimic the
/// conflict response of the API server when a different field manager applies without `force`.
#[derive(Default)]
pub(crate) struct MockDynamicClient {
    objects: Mutex<BTreeMap<ResourceIdentity, (String, Value)>>,
    applied: Mutex<Vec<(PatchParams, Value)>>,
    malformed_response: bool,
}

impl MockDynamicClient {
    /// A mock that answers every apply and get with an object whose `spec` is not a Kamelet spec.
    pub(crate) fn with_malformed_response() -> Self {
        Self {
            malformed_response: true,
            ..Self::default()
        }
    }

    /// Store `object` as if it had been created by `field_manager`.
    pub(crate) fn insert(&self, identity: &ResourceIdentity, field_manager: &str, object: Value) {
        self.objects
            .lock()
            .unwrap()
            .insert(identity.clone(), (field_manager.to_string(), object));
    }

    /// The parameters and documents of every apply, in order.
    pub(crate) fn applied(&self) -> Vec<(PatchParams, Value)> {
        self.applied.lock().unwrap().clone()
    }

    fn response(&self, object: Value) -> Result<DynamicObject, kube::Error> {
        let object = if self.malformed_response {
            let mut object = object;
            object["spec"] = json!("not a kamelet spec");
            object
        } else {
            object
        };
        Ok(serde_json::from_value(object).unwrap())
    }
}

fn api_error(identity: &ResourceIdentity, code: u16, reason: &str, message: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: format!(
            "kamelets.camel.apache.org \"{}\" {}",
            identity.name(),
            message
        ),
        reason: reason.to_string(),
        code,
    })
}

#[async_trait::async_trait]
impl DynamicClient for MockDynamicClient {
    async fn apply(
        &self,
        identity: &ResourceIdentity,
        params: &PatchParams,
        document: &Value,
    ) -> Result<DynamicObject, kube::Error> {
        self.applied
            .lock()
            .unwrap()
            .push((params.clone(), document.clone()));

        let field_manager = params.field_manager.clone().unwrap_or_default();
        let mut objects = self.objects.lock().unwrap();
        if let Some((owner, _)) = objects.get(identity) {
            if owner != &field_manager && !params.force {
                return Err(api_error(
                    identity,
                    409,
                    "Conflict",
                    &format!("Apply failed with 1 conflict: conflict with \"{}\"", owner),
                ));
            }
        }

        let mut object = document.clone();
        object["metadata"]["uid"] = json!("0b7e3bd4-5d4c-4f2b-9d0e-3c8f7a3a1b11");
        object["metadata"]["managedFields"] = json!([{ "manager": field_manager }]);
        object["metadata"]["labels"][SERVER_LABEL] = json!("false");
        objects.insert(identity.clone(), (field_manager, object.clone()));
        drop(objects);
        self.response(object)
    }

    async fn get(&self, identity: &ResourceIdentity) -> Result<DynamicObject, kube::Error> {
        let object = self
            .objects
            .lock()
            .unwrap()
            .get(identity)
            .map(|(_, object)| object.clone());
        match object {
            Some(object) => self.response(object),
            None => Err(api_error(identity, 404, "NotFound", "not found")),
        }
    }

    async fn delete(&self, identity: &ResourceIdentity) -> Result<(), kube::Error> {
        match self.objects.lock().unwrap().remove(identity) {
            Some(_) => Ok(()),
            None => Err(api_error(identity, 404, "NotFound", "not found")),
        }
    }
}
