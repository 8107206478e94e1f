use crate::clients::{HttpStatusCode, StatusCode};
use crate::{Diagnostic, Error as ModelError};
use snafu::Snafu;

/// The `Result` type returned by `clients`.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type returned by `clients`.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The private error type returned by `clients`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub(crate) enum InnerError {
    #[snafu(display("Unable to {} kamelet: {}", operation, reason))]
    Configure { operation: String, reason: String },

    #[snafu(display("Unable to {} kamelet: {}", operation, source))]
    Manifest {
        operation: String,
        source: ModelError,
    },

    #[snafu(display(
        "Unable to update kamelet '{}': the configuration refers to '{}', which is a different resource",
        stored,
        configured
    ))]
    IdentityChanged { stored: String, configured: String },

    #[snafu(display("Unable to {} kamelet '{}', error serializing manifest: {}", operation, id, source))]
    Encoding {
        operation: String,
        id: String,
        source: serde_json::Error,
    },

    #[snafu(display("Unable to {} kamelet '{}', error applying manifest: {}", operation, id, source))]
    Apply {
        operation: String,
        id: String,
        source: kube::Error,
    },

    #[snafu(display("Unable to read kamelet '{}': {}", id, source))]
    Get { id: String, source: kube::Error },

    #[snafu(display("Unable to delete kamelet '{}': {}", id, source))]
    Delete { id: String, source: kube::Error },

    #[snafu(display(
        "Unable to {} kamelet '{}', error deserializing the API server response: {}",
        operation,
        id,
        source
    ))]
    Decoding {
        operation: String,
        id: String,
        source: serde_json::Error,
    },

    #[snafu(display("Error initializing the Kubernetes client: {}", source))]
    Initialization { source: kube::Error },

    #[snafu(display("Unable to read kubeconfig: {}", source))]
    ConfigRead {
        source: kube::config::KubeconfigError,
    },

    #[snafu(display("Unable to create client from kubeconfig: {}", source))]
    ClientCreateKubeconfig {
        source: kube::config::KubeconfigError,
    },
}

impl Error {
    /// The error as a `Diagnostic`: a short title for the kind of failure and this error's full
    /// message as the detail.
    pub fn diagnostic(&self) -> Diagnostic {
        let summary = match &self.0 {
            InnerError::Configure { .. } => "Provider not configured",
            InnerError::Manifest { source, .. } => source.summary(),
            InnerError::IdentityChanged { .. } => "Invalid resource configuration",
            InnerError::Encoding { .. } => "Error marshalling resource",
            InnerError::Apply { .. } => "Error applying resource",
            InnerError::Get { .. } => "Error reading resource",
            InnerError::Delete { .. } => "Error deleting resource",
            InnerError::Decoding { .. } => "Error unmarshalling resource",
            InnerError::Initialization { .. }
            | InnerError::ConfigRead { .. }
            | InnerError::ClientCreateKubeconfig { .. } => "Unable to create Kubernetes client",
        };
        Diagnostic::new(summary, self.to_string())
    }
}

impl HttpStatusCode for InnerError {
    fn status_code(&self) -> Option<StatusCode> {
        match self {
            InnerError::Apply { source, .. }
            | InnerError::Get { source, .. }
            | InnerError::Delete { source, .. }
            | InnerError::Initialization { source } => source.status_code(),
            InnerError::Configure { .. }
            | InnerError::Manifest { .. }
            | InnerError::IdentityChanged { .. }
            | InnerError::Encoding { .. }
            | InnerError::Decoding { .. }
            | InnerError::ConfigRead { .. }
            | InnerError::ClientCreateKubeconfig { .. } => None,
        }
    }
}

impl HttpStatusCode for Error {
    fn status_code(&self) -> Option<StatusCode> {
        self.0.status_code()
    }
}
