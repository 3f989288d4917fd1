//! Decoding of serialized cluster objects
//!
//! The `kind` of the document selects the type. Kinds other than `Secret`
//! and `ConfigMap` decode to nothing.

use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use platutils_core::{make_error, raise_error, ErrorCode, Result};
use serde::Deserialize;

pub const ERROR_DECODE_DATA: &str = "failed to decode k8s data";
pub const ERROR_DECODE_SECRET: &str = "failed to decode k8s secret";
pub const ERROR_DECODE_CONFIG_MAP: &str = "failed to decode k8s configmap";

/// A decoded object of a handled kind
#[derive(Debug, Clone, PartialEq)]
pub enum K8sObject {
    Secret(Secret),
    ConfigMap(ConfigMap),
}

#[derive(Deserialize)]
struct TypeHeader {
    #[serde(default)]
    kind: String,
}

/// Decode a JSON document into the object its `kind` names
///
/// # Errors
///
/// Fails when the document is not JSON or does not decode as its kind.
pub fn decode_k8s(data: &[u8]) -> Result<Option<K8sObject>> {
    let header: TypeHeader = serde_json::from_slice(data)
        .map_err(|err| raise_error("", ErrorCode::UNKNOWN, ERROR_DECODE_DATA, err))?;

    match header.kind.as_str() {
        "Secret" => serde_json::from_slice(data)
            .map(|secret| Some(K8sObject::Secret(secret)))
            .map_err(|err| raise_error("", ErrorCode::UNKNOWN, ERROR_DECODE_SECRET, err)),
        "ConfigMap" => serde_json::from_slice(data)
            .map(|config_map| Some(K8sObject::ConfigMap(config_map)))
            .map_err(|err| raise_error("", ErrorCode::UNKNOWN, ERROR_DECODE_CONFIG_MAP, err)),
        _ => Ok(None),
    }
}

/// Decode a document that must hold a secret
///
/// # Errors
///
/// Fails as [`decode_k8s`] does, and with `INVALID_INPUT` for other kinds.
pub fn decode_k8s_secret(data: &[u8]) -> Result<Secret> {
    match decode_k8s(data)? {
        Some(K8sObject::Secret(secret)) => Ok(secret),
        _ => Err(make_error(
            "",
            ErrorCode::INVALID_INPUT,
            format!("{ERROR_DECODE_SECRET}, data is not a Secret"),
        )),
    }
}

/// Decode a document that must hold a config map
///
/// # Errors
///
/// Fails as [`decode_k8s`] does, and with `INVALID_INPUT` for other kinds.
pub fn decode_k8s_config_map(data: &[u8]) -> Result<ConfigMap> {
    match decode_k8s(data)? {
        Some(K8sObject::ConfigMap(config_map)) => Ok(config_map),
        _ => Err(make_error(
            "",
            ErrorCode::INVALID_INPUT,
            format!("{ERROR_DECODE_CONFIG_MAP}, data is not a ConfigMap"),
        )),
    }
}
