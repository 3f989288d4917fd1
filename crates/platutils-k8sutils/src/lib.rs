//! platutils k8sutils - secrets and config-maps of a Kubernetes cluster
//!
//! [`K8sUtils`] finds, creates, updates, reads and deletes secrets and
//! config maps. A wrapper starts without a clientset; `set_clientset` builds
//! one from kubeconfig bytes. Failures are structured errors whose id is the
//! object name.
//!
//! Implementations come from [`get_k8s_utils`]: `"k8s"` talks to the API
//! server the kubeconfig names, `"fake"` validates the kubeconfig and keeps
//! objects in memory.

pub mod backend;
pub mod decode;
pub mod factory;
pub mod fake;
pub mod k8s;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use platutils_core::Result;

pub use backend::{BackendError, ClusterBackend, KubeBackend, Kind};
pub use decode::{decode_k8s, decode_k8s_config_map, decode_k8s_secret, K8sObject};
pub use factory::{get_k8s_utils, FAKE_IMPL, K8S_IMPL};
pub use fake::FakeCluster;
pub use k8s::K8s;

/// Cluster secrets and config-maps
///
/// Objects are addressed by the name and namespace of their metadata.
///
/// # Errors
///
/// Operations fail with `SERVICE_UNAVAILABLE` before a clientset is set,
/// `INVALID_INPUT` for an object without a name, `NOT_FOUND` or
/// `DUPLICATE_ENTRY` when the object is missing or already exists, and
/// `UNKNOWN` for other backend failures.
#[async_trait]
pub trait K8sUtils: Send + Sync {
    /// Name of the implementation
    fn name(&self) -> &str;

    fn has_clientset(&self) -> bool;

    /// Build the clientset from kubeconfig bytes
    async fn set_clientset(&mut self, kubeconfig: &[u8]) -> Result<()>;

    /// Whether the secret exists
    async fn find_secret(&self, secret: &Secret) -> Result<bool>;

    async fn create_secret(&self, secret: &Secret) -> Result<()>;

    async fn update_secret(&self, secret: &Secret) -> Result<()>;

    async fn delete_secret(&self, secret: &Secret) -> Result<()>;

    /// The stored secret named like `secret`
    async fn get_secret(&self, secret: &Secret) -> Result<Secret>;

    /// Whether the config map exists
    async fn find_config_map(&self, config_map: &ConfigMap) -> Result<bool>;

    async fn create_config_map(&self, config_map: &ConfigMap) -> Result<()>;

    async fn update_config_map(&self, config_map: &ConfigMap) -> Result<()>;

    async fn delete_config_map(&self, config_map: &ConfigMap) -> Result<()>;
}
