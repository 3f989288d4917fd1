use crate::backend::KubeBackend;
use crate::fake::FakeCluster;
use crate::k8s::K8s;
use crate::K8sUtils;
use platutils_core::{make_error, ErrorCode, Result};

/// Implementation reaching a live API server
pub const K8S_IMPL: &str = "k8s";
/// Implementation over an in-memory cluster
pub const FAKE_IMPL: &str = "fake";

/// A wrapper of the named implementation, with no clientset yet
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error for an unknown implementation type.
pub fn get_k8s_utils(impl_type: &str) -> Result<Box<dyn K8sUtils>> {
    match impl_type {
        K8S_IMPL => Ok(Box::new(K8s::<KubeBackend>::new(K8S_IMPL))),
        FAKE_IMPL => Ok(Box::new(K8s::<FakeCluster>::new(FAKE_IMPL))),
        other => Err(make_error(
            "",
            ErrorCode::INVALID_INPUT,
            format!("{other} is not a valid k8sutils implementation type"),
        )),
    }
}
