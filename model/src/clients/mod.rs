/*!

The synchronizer that keeps a Kamelet converged with the cluster, and the dynamic client it uses
to talk to Kubernetes.

!*/

mod dynamic_client;
mod error;
mod http_status_code;
mod synchronizer;

pub use dynamic_client::{kamelet_api_resource, DynamicClient, KubeDynamicClient};
pub use error::{Error, Result};
pub use http_status_code::{AllowNotFound, HttpStatusCode, StatusCode};
pub use synchronizer::KameletSynchronizer;
