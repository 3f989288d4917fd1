//! In-memory location backend
//!
//! Serves `memory://` URIs from a map keyed by path, e.g.
//! `memory:///secret/app/config`. Each handler owns its own map.

use crate::handler::{logged, logged_list, parse_uri, Handler};
use crate::uri::LocationUri;
use platutils_core::{make_error, raise_error, ErrorCode, Result};
use platutils_goutils::find_in_string_slice;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const HANDLER_SCHEME: &str = "memory";
pub const HANDLER_ID: &str = "memory location handler";
pub const ERROR_CONNECT_FAIL: &str = "failed to connect to memory";

/// Contents directly under a path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathInfo {
    pub path: String,
    #[serde(rename = "subpath-list")]
    pub path_list: Vec<String>,
    #[serde(rename = "item-list")]
    pub item_list: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryHandler {
    data: BTreeMap<String, Value>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sub-paths and items directly under `path`
    pub fn list(&self, path: &str) -> PathInfo {
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut info = PathInfo {
            path: path.to_string(),
            ..PathInfo::default()
        };

        for key in self.data.keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((directory, _)) if !directory.is_empty() => {
                    if find_in_string_slice(&info.path_list, directory).is_none() {
                        info.path_list.push(directory.to_string());
                    }
                }
                Some(_) => {}
                None if rest.is_empty() => {}
                None => info.item_list.push(rest.to_string()),
            }
        }

        info
    }

    /// Parse the URI and check its scheme
    fn locate(&self, uri: &str) -> Result<LocationUri> {
        let parts = parse_uri(uri)
            .map_err(|err| raise_error(HANDLER_ID, ErrorCode::INVALID_INPUT, ERROR_CONNECT_FAIL, err))?;
        self.verify_scheme(uri)
            .map_err(|err| raise_error(HANDLER_ID, ErrorCode::UNKNOWN, ERROR_CONNECT_FAIL, err))?;
        Ok(parts)
    }

    fn read(&self, uri: &str) -> Result<Value> {
        let parts = self.locate(uri)?;
        self.data.get(parts.path()).cloned().ok_or_else(|| {
            make_error(
                HANDLER_ID,
                ErrorCode::NOT_FOUND,
                format!("no data at: {}", parts.path()),
            )
        })
    }
}

impl Handler for MemoryHandler {
    fn connect(&mut self, uri: &str) -> Result<()> {
        logged("connect", HANDLER_ID, uri, || {
            self.locate(uri)
                .map(|_| ())
                .map_err(|err| raise_error(HANDLER_ID, ErrorCode::UNKNOWN, "failed to connect", err))
        })
    }

    fn put_data(&mut self, uri: &str, data: Value) -> Result<()> {
        logged("put_data", HANDLER_ID, uri, || {
            let parts = self.locate(uri)?;
            self.data.insert(parts.path().to_string(), data);
            Ok(())
        })
    }

    fn get_data(&mut self, uri: &str) -> Result<Value> {
        logged("get_data", HANDLER_ID, uri, || self.read(uri))
    }

    /// Deleting a path that holds no data succeeds
    fn delete_data(&mut self, uri: &str) -> Result<()> {
        logged("delete_data", HANDLER_ID, uri, || {
            let parts = self.locate(uri)?;
            self.data.remove(parts.path());
            Ok(())
        })
    }

    fn list_data(&mut self, uri: &str) -> Result<Vec<String>> {
        logged_list("list_data", HANDLER_ID, uri, || {
            let parts = self.locate(uri)?;
            Ok(self.list(parts.path()).item_list)
        })
    }

    fn id(&self) -> &'static str {
        HANDLER_ID
    }

    fn scheme(&self) -> &'static str {
        HANDLER_SCHEME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> MemoryHandler {
        let mut handler = MemoryHandler::new();
        for path in [
            "/secret/app/one",
            "/secret/app/two",
            "/secret/app/nested/three",
            "/secret/app/nested/four",
            "/secret/application",
        ] {
            handler.data.insert(path.to_string(), json!(path));
        }
        handler
    }

    #[test]
    fn test_list_separates_items_and_sub_paths() {
        let info = seeded().list("/secret/app");
        assert_eq!(info.path, "/secret/app");
        assert_eq!(info.item_list, ["one", "two"]);
        assert_eq!(info.path_list, ["nested"]);

        let info = seeded().list("/secret/app/");
        assert_eq!(info.item_list, ["one", "two"]);
    }

    #[test]
    fn test_list_of_unknown_path_is_empty() {
        let info = seeded().list("/other");
        assert!(info.item_list.is_empty());
        assert!(info.path_list.is_empty());
    }

    #[test]
    fn test_path_info_serializes_with_list_names() {
        let info = PathInfo {
            path: "/a".to_string(),
            path_list: vec!["b".to_string()],
            item_list: vec!["c".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"path": "/a", "subpath-list": ["b"], "item-list": ["c"]})
        );
    }
}
