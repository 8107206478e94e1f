use super::error::{self, Result};
use crate::constants::{GROUP, KIND, PLURAL, VERSION};
use crate::ResourceIdentity;
use kube::api::{Api, ApiResource, DeleteParams, DynamicObject, Patch, PatchParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::core::GroupVersionKind;
use kube::{Client, Config};
use log::trace;
use serde_json::Value;
use snafu::ResultExt;
use std::path::Path;

/// `DynamicClient` is the transport used by the [`KameletSynchronizer`]. It issues exactly one
/// Kubernetes API call per function against the `kamelets.camel.apache.org` endpoint of the
/// namespace named by the identity, and returns the `kube` error unchanged on failure.
///
/// This is provided as a trait so that mock implementations can be injected into the
/// synchronizer for testing purposes. In practice you will use the [`KubeDynamicClient`].
///
/// [`KameletSynchronizer`]: crate::clients::KameletSynchronizer
#[async_trait::async_trait]
pub trait DynamicClient: Send + Sync {
    /// Server-side apply `document` to the object named by `identity`.
    async fn apply(
        &self,
        identity: &ResourceIdentity,
        params: &PatchParams,
        document: &Value,
    ) -> std::result::Result<DynamicObject, kube::Error>;

    async fn get(
        &self,
        identity: &ResourceIdentity,
    ) -> std::result::Result<DynamicObject, kube::Error>;

    async fn delete(&self, identity: &ResourceIdentity) -> std::result::Result<(), kube::Error>;
}

/// The `ApiResource` of the Kamelet kind, used to address it through the dynamic API.
pub fn kamelet_api_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk(GROUP, VERSION, KIND), PLURAL)
}

/// Provides the default [`DynamicClient`] implementation on top of a `kube::Client`.
#[derive(Clone)]
pub struct KubeDynamicClient {
    k8s_client: Client,
    api_resource: ApiResource,
}

impl KubeDynamicClient {
    /// Create a client using the default `kube::Client` configuration inference.
    pub async fn new() -> Result<Self> {
        let k8s_client = Client::try_default()
            .await
            .context(error::InitializationSnafu)?;
        Ok(Self::new_from_k8s_client(k8s_client))
    }

    /// Create a client from the path to a kubeconfig file.
    pub async fn new_from_kubeconfig_path(kubeconfig_path: &Path) -> Result<Self> {
        let kubeconfig = Kubeconfig::read_from(kubeconfig_path).context(error::ConfigReadSnafu)?;
        let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .context(error::ClientCreateKubeconfigSnafu)?;
        let k8s_client = Client::try_from(config).context(error::InitializationSnafu)?;
        Ok(Self::new_from_k8s_client(k8s_client))
    }

    pub fn new_from_k8s_client(k8s_client: Client) -> Self {
        Self {
            k8s_client,
            api_resource: kamelet_api_resource(),
        }
    }

    fn api(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.k8s_client.clone(), namespace, &self.api_resource)
    }
}

#[async_trait::async_trait]
impl DynamicClient for KubeDynamicClient {
    async fn apply(
        &self,
        identity: &ResourceIdentity,
        params: &PatchParams,
        document: &Value,
    ) -> std::result::Result<DynamicObject, kube::Error> {
        trace!(
            "applying kamelet '{}' as field manager {:?} (force: {})",
            identity,
            params.field_manager,
            params.force
        );
        self.api(identity.namespace())
            .patch(identity.name(), params, &Patch::Apply(document))
            .await
    }

    async fn get(
        &self,
        identity: &ResourceIdentity,
    ) -> std::result::Result<DynamicObject, kube::Error> {
        trace!("getting kamelet '{}'", identity);
        self.api(identity.namespace()).get(identity.name()).await
    }

    async fn delete(&self, identity: &ResourceIdentity) -> std::result::Result<(), kube::Error> {
        trace!("deleting kamelet '{}'", identity);
        self.api(identity.namespace())
            .delete(identity.name(), &DeleteParams::default())
            .await
            .map(|_| ())
    }
}

#[test]
fn kamelet_api_resource_test() {
    let api_resource = kamelet_api_resource();
    assert_eq!(api_resource.group, "camel.apache.org");
    assert_eq!(api_resource.version, "v1alpha1");
    assert_eq!(api_resource.api_version, "camel.apache.org/v1alpha1");
    assert_eq!(api_resource.kind, "Kamelet");
    assert_eq!(api_resource.plural, "kamelets");
}
