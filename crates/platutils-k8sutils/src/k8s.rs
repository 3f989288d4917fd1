//! Secrets and config-maps over a cluster backend

use crate::backend::{BackendError, ClusterBackend, Kind};
use crate::K8sUtils;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::config::Kubeconfig;
use kube::Resource;
use platutils_core::{log_op_end, log_op_error, log_op_start, make_error, raise_error};
use platutils_core::{ErrorCode, Result};
use std::future::Future;
use std::time::Instant;

pub const ERROR_BUILD_CONFIG: &str = "failed trying to build config";
pub const ERROR_GET_CLIENTSET: &str = "failed trying to get clientset";
pub const ERROR_NO_CLIENTSET: &str = "no clientset, set one from a kubeconfig first";
pub const ERROR_NO_NAME: &str = "object has no name";

/// Namespace of objects that name none
pub const DEFAULT_NAMESPACE: &str = "default";

/// The wrapper, named after the implementation that built it
pub struct K8s<B> {
    name: &'static str,
    backend: Option<B>,
}

impl<B: ClusterBackend> K8s<B> {
    /// A wrapper with no clientset yet
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            backend: None,
        }
    }

    pub fn with_backend(name: &'static str, backend: B) -> Self {
        Self {
            name,
            backend: Some(backend),
        }
    }

    /// The backend set from the last kubeconfig
    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    fn connected(&self, id: &str) -> Result<&B> {
        self.backend
            .as_ref()
            .ok_or_else(|| make_error(id, ErrorCode::SERVICE_UNAVAILABLE, ERROR_NO_CLIENTSET))
    }

    async fn find<K: Kind>(&self, object: &K) -> Result<bool> {
        let (namespace, name) = identity(object)?;
        logged("find", K::LABEL, namespace, name, async {
            match self.connected(name)?.get::<K>(namespace, name).await {
                Ok(_) => Ok(true),
                Err(BackendError::NotFound { .. }) => Ok(false),
                Err(err) => Err(failure::<K>("find", name, err)),
            }
        })
        .await
    }

    async fn get<K: Kind>(&self, object: &K) -> Result<K> {
        let (namespace, name) = identity(object)?;
        logged("get", K::LABEL, namespace, name, async {
            self.connected(name)?
                .get::<K>(namespace, name)
                .await
                .map_err(|err| failure::<K>("find", name, err))
        })
        .await
    }

    async fn create<K: Kind>(&self, object: &K) -> Result<()> {
        let (namespace, name) = identity(object)?;
        logged("create", K::LABEL, namespace, name, async {
            self.connected(name)?
                .create(namespace, object)
                .await
                .map_err(|err| failure::<K>("create", name, err))
        })
        .await
    }

    async fn update<K: Kind>(&self, object: &K) -> Result<()> {
        let (namespace, name) = identity(object)?;
        logged("update", K::LABEL, namespace, name, async {
            self.connected(name)?
                .replace(namespace, name, object)
                .await
                .map_err(|err| failure::<K>("update", name, err))
        })
        .await
    }

    async fn delete<K: Kind>(&self, object: &K) -> Result<()> {
        let (namespace, name) = identity(object)?;
        logged("delete", K::LABEL, namespace, name, async {
            self.connected(name)?
                .delete::<K>(namespace, name)
                .await
                .map_err(|err| failure::<K>("delete", name, err))
        })
        .await
    }
}

/// Namespace and name of an object; a missing namespace is the default one
fn identity<K: Kind>(object: &K) -> Result<(&str, &str)> {
    let meta = object.meta();
    let name = meta
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            make_error(
                "",
                ErrorCode::INVALID_INPUT,
                format!("{ERROR_NO_NAME}, cannot use {}", K::LABEL),
            )
        })?;
    let namespace = meta
        .namespace
        .as_deref()
        .filter(|namespace| !namespace.is_empty())
        .unwrap_or(DEFAULT_NAMESPACE);
    Ok((namespace, name))
}

fn failure<K: Kind>(verb: &str, name: &str, err: BackendError) -> platutils_core::Error {
    let code = match err {
        BackendError::NotFound { .. } => ErrorCode::NOT_FOUND,
        BackendError::AlreadyExists { .. } => ErrorCode::DUPLICATE_ENTRY,
        _ => ErrorCode::UNKNOWN,
    };
    raise_error(
        name,
        code,
        format!("failed trying to {verb} {}", K::LABEL),
        err,
    )
}

/// Run a cluster operation between start and end events
async fn logged<T>(
    op: &'static str,
    kind: &'static str,
    namespace: &str,
    object: &str,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    log_op_start!(op, kind = kind, namespace = namespace, object = object);
    let start = Instant::now();

    let result = operation.await.map_err(|e| {
        log_op_error!(
            op,
            e,
            duration_ms = start.elapsed().as_millis() as u64,
            kind = kind,
            namespace = namespace,
            object = object
        );
        e
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        kind = kind,
        namespace = namespace,
        object = object
    );

    Ok(result)
}

#[async_trait]
impl<B: ClusterBackend> K8sUtils for K8s<B> {
    fn name(&self) -> &str {
        self.name
    }

    fn has_clientset(&self) -> bool {
        self.backend.is_some()
    }

    async fn set_clientset(&mut self, kubeconfig: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(kubeconfig)
            .map_err(|err| raise_error("", ErrorCode::UNKNOWN, ERROR_BUILD_CONFIG, err))?;
        if text.trim().is_empty() {
            return Err(make_error(
                "",
                ErrorCode::UNKNOWN,
                format!("{ERROR_BUILD_CONFIG}, kubeconfig is empty"),
            ));
        }
        let kubeconfig = Kubeconfig::from_yaml(text)
            .map_err(|err| raise_error("", ErrorCode::UNKNOWN, ERROR_BUILD_CONFIG, err))?;

        let backend = B::connect(kubeconfig).await.map_err(|err| {
            let message = match err {
                BackendError::Config(_) => ERROR_BUILD_CONFIG,
                _ => ERROR_GET_CLIENTSET,
            };
            raise_error("", ErrorCode::UNKNOWN, message, err)
        })?;
        self.backend = Some(backend);
        Ok(())
    }

    async fn find_secret(&self, secret: &Secret) -> Result<bool> {
        self.find(secret).await
    }

    async fn create_secret(&self, secret: &Secret) -> Result<()> {
        self.create(secret).await
    }

    async fn update_secret(&self, secret: &Secret) -> Result<()> {
        self.update(secret).await
    }

    async fn delete_secret(&self, secret: &Secret) -> Result<()> {
        self.delete(secret).await
    }

    async fn get_secret(&self, secret: &Secret) -> Result<Secret> {
        self.get(secret).await
    }

    async fn find_config_map(&self, config_map: &ConfigMap) -> Result<bool> {
        self.find(config_map).await
    }

    async fn create_config_map(&self, config_map: &ConfigMap) -> Result<()> {
        self.create(config_map).await
    }

    async fn update_config_map(&self, config_map: &ConfigMap) -> Result<()> {
        self.update(config_map).await
    }

    async fn delete_config_map(&self, config_map: &ConfigMap) -> Result<()> {
        self.delete(config_map).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn secret(name: Option<&str>, namespace: Option<&str>) -> Secret {
        Secret {
            metadata: ObjectMeta {
                name: name.map(str::to_string),
                namespace: namespace.map(str::to_string),
                ..ObjectMeta::default()
            },
            ..Secret::default()
        }
    }

    #[test]
    fn test_identity_defaults_namespace() {
        assert_eq!(identity(&secret(Some("db"), None)).unwrap(), ("default", "db"));
        assert_eq!(identity(&secret(Some("db"), Some(""))).unwrap(), ("default", "db"));
        assert_eq!(identity(&secret(Some("db"), Some("Test"))).unwrap(), ("Test", "db"));
    }

    #[test]
    fn test_identity_requires_name() {
        for object in [secret(None, Some("Test")), secret(Some(""), Some("Test"))] {
            let err = identity(&object).unwrap_err();
            assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
            assert_eq!(err.message(), "object has no name, cannot use secret");
        }
    }

    #[test]
    fn test_failure_codes_by_backend_error() {
        let err = failure::<Secret>("find", "db", BackendError::not_found::<Secret>("db"));
        assert_eq!(err.code(), ErrorCode::NOT_FOUND);
        assert_eq!(err.id(), "db");
        assert!(err.message().starts_with("failed trying to find secret"));

        let err = failure::<ConfigMap>(
            "create",
            "db",
            BackendError::already_exists::<ConfigMap>("db"),
        );
        assert_eq!(err.code(), ErrorCode::DUPLICATE_ENTRY);
        assert!(err.message().starts_with("failed trying to create configmap"));

        let err = failure::<Secret>("delete", "db", BackendError::Other("etcd down".into()));
        assert_eq!(err.code(), ErrorCode::UNKNOWN);
        assert_eq!(err.message(), "failed trying to delete secret, etcd down");
    }
}
