use crate::constants::IMPORT_ID_FORMAT;
use crate::error::{self, Result};
use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The composite key of a namespaced Kamelet. An identity cannot be changed once the resource has
/// been created; a different identity refers to a different resource.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ResourceIdentity {
    namespace: String,
    name: String,
}

impl ResourceIdentity {
    /// Create an identity. Both `namespace` and `name` must be non-empty.
    pub fn new<S1, S2>(namespace: S1, name: S2) -> Result<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        let namespace = namespace.into();
        let name = name.into();
        ensure!(
            !namespace.is_empty(),
            error::InvalidManifestSnafu {
                what: "'metadata.namespace' is required"
            }
        );
        ensure!(
            !name.is_empty(),
            error::InvalidManifestSnafu {
                what: "'metadata.name' is required"
            }
        );
        Ok(Self { namespace, name })
    }

    /// Parse an import identifier of the literal form `namespace/name`. Exactly two non-empty
    /// segments are accepted.
    pub fn parse_import_id(input: &str) -> Result<Self> {
        let segments: Vec<&str> = input.split('/').collect();
        match segments.as_slice() {
            [namespace, name] if !namespace.is_empty() && !name.is_empty() => Ok(Self {
                namespace: (*namespace).to_string(),
                name: (*name).to_string(),
            }),
            _ => error::ImportFormatSnafu {
                input,
                expected: IMPORT_ID_FORMAT,
            }
            .fail()
            .map_err(Into::into),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque identifier stored in state, `name/namespace`. Every code path that needs an id
    /// derives it here.
    pub fn id(&self) -> String {
        format!("{}/{}", self.name, self.namespace)
    }
}

/// Displays the identity in the `namespace/name` form accepted by
/// [`ResourceIdentity::parse_import_id`].
impl Display for ResourceIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for ResourceIdentity {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_import_id(s)
    }
}
