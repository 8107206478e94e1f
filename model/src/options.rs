use crate::constants::DEFAULT_FIELD_MANAGER;
use kube::api::PatchParams;
use kube::core::params::ValidationDirective;
use serde::{Deserialize, Serialize};

/// Provider-wide settings. These are supplied once, when the synchronizer is configured, and are
/// read-only thereafter.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// The field manager used for server-side apply unless a resource overrides it.
    pub field_manager: String,
    /// Whether server-side apply takes ownership of conflicting fields unless a resource
    /// overrides it.
    pub force_conflicts: bool,
    /// When `true` the provider must not talk to a cluster.
    pub offline: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            field_manager: DEFAULT_FIELD_MANAGER.to_string(),
            force_conflicts: false,
            offline: false,
        }
    }
}

/// Per-resource overrides of the [`ProviderConfig`] apply settings. `None` means the value is
/// null or unknown in the configuration.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Eq, PartialEq)]
pub struct ApplyOverrides {
    pub field_manager: Option<String>,
    pub force_conflicts: Option<bool>,
}

/// The effective server-side apply settings of one write.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApplyOptions {
    pub field_manager: String,
    pub force_conflicts: bool,
}

impl ApplyOptions {
    /// An override wins when it is set, otherwise the provider default is used. Create and update
    /// both resolve their options here.
    pub fn resolve(config: &ProviderConfig, overrides: &ApplyOverrides) -> Self {
        Self {
            field_manager: overrides
                .field_manager
                .clone()
                .unwrap_or_else(|| config.field_manager.clone()),
            force_conflicts: overrides.force_conflicts.unwrap_or(config.force_conflicts),
        }
    }

    /// Server-side apply parameters with strict field validation.
    pub fn patch_params(&self) -> PatchParams {
        PatchParams {
            field_manager: Some(self.field_manager.clone()),
            force: self.force_conflicts,
            field_validation: Some(ValidationDirective::Strict),
            ..PatchParams::default()
        }
    }
}
