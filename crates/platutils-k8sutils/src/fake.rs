//! In-memory cluster for tests

use crate::backend::{load_config, BackendError, ClusterBackend, Kind};
use async_trait::async_trait;
use kube::config::Kubeconfig;
use kube::Resource;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

type ObjectKey = (&'static str, String, String);

/// Cluster keeping objects in a map, keyed by kind, namespace and name
///
/// `connect` validates the kubeconfig the way a live backend would and
/// then starts from an empty cluster.
#[derive(Default)]
pub struct FakeCluster {
    objects: Mutex<BTreeMap<ObjectKey, Value>>,
    failure: Mutex<Option<String>>,
}

impl FakeCluster {
    /// Make every later operation fail with the message
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.into());
        }
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn objects(&self) -> Result<MutexGuard<'_, BTreeMap<ObjectKey, Value>>, BackendError> {
        if let Some(message) = self.failure.lock().ok().and_then(|f| f.clone()) {
            return Err(BackendError::Other(message));
        }
        self.objects
            .lock()
            .map_err(|_| BackendError::Other("fake cluster state poisoned".to_string()))
    }
}

fn key<K: Kind>(namespace: &str, name: &str) -> ObjectKey {
    (K::LABEL, namespace.to_string(), name.to_string())
}

#[async_trait]
impl ClusterBackend for FakeCluster {
    async fn connect(kubeconfig: Kubeconfig) -> Result<Self, BackendError> {
        load_config(kubeconfig).await?;
        Ok(Self::default())
    }

    async fn get<K: Kind>(&self, namespace: &str, name: &str) -> Result<K, BackendError> {
        let value = self
            .objects()?
            .get(&key::<K>(namespace, name))
            .cloned()
            .ok_or_else(|| BackendError::not_found::<K>(name))?;
        Ok(serde_json::from_value(value)?)
    }

    async fn create<K: Kind>(&self, namespace: &str, object: &K) -> Result<(), BackendError> {
        let name = object.meta().name.clone().unwrap_or_default();
        let value = serde_json::to_value(object)?;
        let mut objects = self.objects()?;
        let key = key::<K>(namespace, &name);
        if objects.contains_key(&key) {
            return Err(BackendError::already_exists::<K>(&name));
        }
        objects.insert(key, value);
        Ok(())
    }

    async fn replace<K: Kind>(
        &self,
        namespace: &str,
        name: &str,
        object: &K,
    ) -> Result<(), BackendError> {
        let value = serde_json::to_value(object)?;
        match self.objects()?.get_mut(&key::<K>(namespace, name)) {
            Some(stored) => {
                *stored = value;
                Ok(())
            }
            None => Err(BackendError::not_found::<K>(name)),
        }
    }

    async fn delete<K: Kind>(&self, namespace: &str, name: &str) -> Result<(), BackendError> {
        self.objects()?
            .remove(&key::<K>(namespace, name))
            .map(drop)
            .ok_or_else(|| BackendError::not_found::<K>(name))
    }
}
