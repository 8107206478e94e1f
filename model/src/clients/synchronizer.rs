use super::error::{self, Result};
use super::{AllowNotFound, DynamicClient, KubeDynamicClient};
use crate::{
    ApplyOptions, KameletConfig, KameletManifest, KameletState, ProviderConfig, ResourceIdentity,
};
use kube::api::DynamicObject;
use log::{debug, info, trace};
use snafu::{ensure, OptionExt, ResultExt};

/// # Kamelet Synchronizer
///
/// Keeps one Kamelet's configuration converged with the cluster. Every operation makes at most one
/// API call and either returns a complete new [`KameletState`] or an error; nothing is retried.
///
/// - `create`/`update` server-side apply the configured manifest and store what the API server
///   returned, not what was sent.
/// - `read` refreshes a stored state. A missing object is reported as an error for which
///   [`HttpStatusCode::is_not_found`] is `true`.
/// - `delete` removes the object. An object that is already gone is not an error.
/// - `import` seeds a state from a `namespace/name` identifier without calling the cluster.
///
/// The synchronizer only holds the [`ProviderConfig`] and the client it was configured with.
///
/// [`HttpStatusCode::is_not_found`]: crate::clients::HttpStatusCode::is_not_found
pub struct KameletSynchronizer<C = KubeDynamicClient> {
    config: ProviderConfig,
    client: Option<C>,
}

impl<C> KameletSynchronizer<C>
where
    C: DynamicClient,
{
    /// `client` may be `None` when `config.offline` is set. Operations that need the cluster fail
    /// with a configuration error when the provider is offline or has no client.
    pub fn configure(config: ProviderConfig, client: Option<C>) -> Self {
        debug!(
            "configuring kamelet synchronizer (field manager: '{}', force conflicts: {}, offline: {})",
            config.field_manager, config.force_conflicts, config.offline
        );
        Self { config, client }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn dynamic_client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    pub async fn create(&self, config: KameletConfig) -> Result<KameletState> {
        let identity = config
            .identity()
            .context(error::ManifestSnafu { operation: "create" })?;
        let id = identity.id();
        self.apply("create", id, &identity, config).await
    }

    pub async fn read(&self, state: &KameletState) -> Result<KameletState> {
        let identity = state
            .identity()
            .context(error::ManifestSnafu { operation: "read" })?;
        let client = self.live_client("read")?;
        let object = client
            .get(&identity)
            .await
            .context(error::GetSnafu { id: &state.id })?;
        let manifest = decode("read", &state.id, object)?;
        trace!("read kamelet '{}'", identity);
        Ok(KameletState {
            metadata: manifest.metadata,
            spec: manifest.spec,
            ..state.clone()
        })
    }

    /// Apply `config` to the object tracked by `prior`. The identity of a resource cannot change,
    /// so `config` must name the same namespace and name as `prior`.
    pub async fn update(&self, config: KameletConfig, prior: &KameletState) -> Result<KameletState> {
        let identity = config
            .identity()
            .context(error::ManifestSnafu { operation: "update" })?;
        let stored = prior
            .identity()
            .context(error::ManifestSnafu { operation: "update" })?;
        ensure!(
            identity == stored,
            error::IdentityChangedSnafu {
                stored: stored.to_string(),
                configured: identity.to_string(),
            }
        );
        self.apply("update", prior.id.clone(), &identity, config)
            .await
    }

    pub async fn delete(&self, state: &KameletState) -> Result<()> {
        let identity = state
            .identity()
            .context(error::ManifestSnafu {
                operation: "delete",
            })?;
        let client = self.live_client("delete")?;
        let deleted = client
            .delete(&identity)
            .await
            .allow_not_found(|_| info!("kamelet '{}' was already deleted", identity))
            .context(error::DeleteSnafu { id: &state.id })?;
        if deleted.is_some() {
            trace!("deleted kamelet '{}'", identity);
        }
        Ok(())
    }

    /// Parse a `namespace/name` import identifier into a placeholder state. A subsequent `read`
    /// fills in the rest. This works when the provider is offline.
    pub fn import(&self, import_id: &str) -> Result<KameletState> {
        let identity = ResourceIdentity::parse_import_id(import_id)
            .context(error::ManifestSnafu { operation: "import" })?;
        debug!("importing kamelet '{}' as '{}'", identity, identity.id());
        Ok(KameletState::placeholder(&identity))
    }

    async fn apply(
        &self,
        operation: &str,
        id: String,
        identity: &ResourceIdentity,
        config: KameletConfig,
    ) -> Result<KameletState> {
        let client = self.live_client(operation)?;
        let options = ApplyOptions::resolve(&self.config, &config.overrides());
        let KameletConfig {
            force_conflicts,
            field_manager,
            wait_for,
            manifest,
        } = config;
        let document = serde_json::to_value(manifest.with_type_meta())
            .context(error::EncodingSnafu { operation, id: &id })?;
        debug!(
            "{} kamelet '{}' as field manager '{}' (force conflicts: {})",
            operation, identity, options.field_manager, options.force_conflicts
        );
        let object = client
            .apply(identity, &options.patch_params(), &document)
            .await
            .context(error::ApplySnafu { operation, id: &id })?;
        let manifest = decode(operation, &id, object)?;
        Ok(KameletState {
            id,
            force_conflicts,
            field_manager,
            wait_for,
            metadata: manifest.metadata,
            spec: manifest.spec,
        })
    }

    fn live_client(&self, operation: &str) -> Result<&C> {
        ensure!(
            !self.config.offline,
            error::ConfigureSnafu {
                operation,
                reason: "the provider is running in offline mode",
            }
        );
        Ok(self.client.as_ref().context(error::ConfigureSnafu {
            operation,
            reason: "no Kubernetes client has been configured",
        })?)
    }
}

/// Decode an API server response into a manifest.
fn decode(operation: &str, id: &str, object: DynamicObject) -> Result<KameletManifest> {
    Ok(serde_json::to_value(object)
        .and_then(serde_json::from_value)
        .context(error::DecodingSnafu { operation, id })?)
}
