//! Cluster backends
//!
//! A [`ClusterBackend`] reads and writes namespaced objects of the API kinds
//! the wrapper manages. [`KubeBackend`] talks to an API server through a
//! `kube` client.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, DeleteParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::{Client, Config, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

/// A namespaced API kind handled by the wrapper
pub trait Kind:
    Resource<Scope = NamespaceResourceScope, DynamicType = ()>
    + Clone
    + Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Lower-case name used in messages and log events
    const LABEL: &'static str;
}

impl Kind for Secret {
    const LABEL: &'static str = "secret";
}

impl Kind for ConfigMap {
    const LABEL: &'static str = "configmap";
}

/// Failure reported by a cluster backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} \"{name}\" already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("invalid kubeconfig: {0}")]
    Config(#[from] KubeconfigError),

    #[error("kubernetes api error: {0}")]
    Kube(#[source] kube::Error),

    #[error("object encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BackendError {
    pub fn not_found<K: Kind>(name: &str) -> Self {
        Self::NotFound {
            kind: K::LABEL,
            name: name.to_string(),
        }
    }

    pub fn already_exists<K: Kind>(name: &str) -> Self {
        Self::AlreadyExists {
            kind: K::LABEL,
            name: name.to_string(),
        }
    }

    /// Classify an API failure by its status code
    fn from_kube<K: Kind>(name: &str, err: kube::Error) -> Self {
        match &err {
            kube::Error::Api(response) if response.code == 404 => Self::not_found::<K>(name),
            kube::Error::Api(response) if response.code == 409 => Self::already_exists::<K>(name),
            _ => Self::Kube(err),
        }
    }
}

/// Storage of namespaced cluster objects
///
/// # Errors
///
/// Operations fail with [`BackendError::NotFound`] for a missing object,
/// [`BackendError::AlreadyExists`] when creating over an existing one, and
/// other variants when the backend cannot be reached.
#[async_trait]
pub trait ClusterBackend: Send + Sync {
    /// Build a backend from a parsed kubeconfig
    async fn connect(kubeconfig: Kubeconfig) -> Result<Self, BackendError>
    where
        Self: Sized;

    async fn get<K: Kind>(&self, namespace: &str, name: &str) -> Result<K, BackendError>;

    async fn create<K: Kind>(&self, namespace: &str, object: &K) -> Result<(), BackendError>;

    async fn replace<K: Kind>(
        &self,
        namespace: &str,
        name: &str,
        object: &K,
    ) -> Result<(), BackendError>;

    async fn delete<K: Kind>(&self, namespace: &str, name: &str) -> Result<(), BackendError>;
}

/// Load the client configuration a kubeconfig's current context selects
pub(crate) async fn load_config(kubeconfig: Kubeconfig) -> Result<Config, BackendError> {
    Ok(Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?)
}

/// Backend of a live API server
#[derive(Clone)]
pub struct KubeBackend {
    client: Client,
}

impl KubeBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn api<K: Kind>(&self, namespace: &str) -> Api<K> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ClusterBackend for KubeBackend {
    async fn connect(kubeconfig: Kubeconfig) -> Result<Self, BackendError> {
        let config = load_config(kubeconfig).await?;
        let client = Client::try_from(config).map_err(BackendError::Kube)?;
        Ok(Self::new(client))
    }

    async fn get<K: Kind>(&self, namespace: &str, name: &str) -> Result<K, BackendError> {
        self.api::<K>(namespace)
            .get(name)
            .await
            .map_err(|err| BackendError::from_kube::<K>(name, err))
    }

    async fn create<K: Kind>(&self, namespace: &str, object: &K) -> Result<(), BackendError> {
        let name = object.meta().name.clone().unwrap_or_default();
        self.api::<K>(namespace)
            .create(&PostParams::default(), object)
            .await
            .map(drop)
            .map_err(|err| BackendError::from_kube::<K>(&name, err))
    }

    async fn replace<K: Kind>(
        &self,
        namespace: &str,
        name: &str,
        object: &K,
    ) -> Result<(), BackendError> {
        self.api::<K>(namespace)
            .replace(name, &PostParams::default(), object)
            .await
            .map(drop)
            .map_err(|err| BackendError::from_kube::<K>(name, err))
    }

    async fn delete<K: Kind>(&self, namespace: &str, name: &str) -> Result<(), BackendError> {
        self.api::<K>(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(drop)
            .map_err(|err| BackendError::from_kube::<K>(name, err))
    }
}
