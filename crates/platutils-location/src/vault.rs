//! Secrets-vault location backend
//!
//! Serves `vault://<service>,<component>@/secret/...` URIs. The userinfo
//! names the service and component a session is opened for; sessions are
//! cached per `service,component` pair and reused by later operations.
//!
//! Sessions come from a [`SessionProvider`]. The default provider has no
//! backend and fails every session with `SERVICE_UNAVAILABLE`.

use crate::handler::{
    logged, logged_list, parse_uri, Handler, ERROR_DELETE_DATA_FAIL,
    ERROR_GET_DATA_FAIL, ERROR_LIST_DATA_FAIL, ERROR_PUT_DATA_FAIL,
};
use crate::uri::LocationUri;
use platutils_core::{make_error, raise_error, Cause, ErrorCode, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::error::Error as StdError;

pub const HANDLER_SCHEME: &str = "vault";
pub const HANDLER_ID: &str = "vault location handler";
pub const ERROR_CONNECT_FAIL: &str = "failed to connect to vault";
pub const ERROR_INVALID_USER_INFO: &str =
    "the supplied user info is incorrect. Should be of the form <service>,<component>";

/// Key under which `put_data` stores the value
pub const VAULT_LOCATION_DATA: &str = "VAULT_LOC_DATA";

/// Failure reported by a vault backend
pub type BackendError = Box<dyn StdError + Send + Sync>;

/// An authenticated session with the vault
pub trait SecretSession: Send {
    fn get_secret(&mut self, path: &str) -> std::result::Result<Map<String, Value>, BackendError>;

    /// Names of the secrets under a path
    fn get_secrets(&mut self, path: &str) -> std::result::Result<Vec<String>, BackendError>;

    fn delete_secret(&mut self, path: &str) -> std::result::Result<(), BackendError>;

    fn store_secret_by_path(
        &mut self,
        path: &str,
        data: Map<String, Value>,
    ) -> std::result::Result<(), BackendError>;
}

/// Opens vault sessions
pub trait SessionProvider: Send {
    fn new_session(
        &self,
        name: &str,
        service: &str,
        component: &str,
    ) -> std::result::Result<Box<dyn SecretSession>, BackendError>;
}

/// Provider used when no vault backend is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProvider;

impl SessionProvider for UnconfiguredProvider {
    fn new_session(
        &self,
        _name: &str,
        service: &str,
        component: &str,
    ) -> std::result::Result<Box<dyn SecretSession>, BackendError> {
        Err(Box::new(make_error(
            format!("{service},{component}"),
            ErrorCode::SERVICE_UNAVAILABLE,
            "no vault backend is configured",
        )))
    }
}

pub struct VaultHandler {
    sessions: HashMap<String, Box<dyn SecretSession>>,
    provider: Box<dyn SessionProvider>,
}

impl Default for VaultHandler {
    fn default() -> Self {
        Self::new(UnconfiguredProvider)
    }
}

impl std::fmt::Debug for VaultHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultHandler")
            .field("sessions", &self.sessions.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl VaultHandler {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self {
            sessions: HashMap::new(),
            provider: Box::new(provider),
        }
    }

    /// Number of cached sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Split the userinfo of a URI into service and component
    fn parse_user_info(&self, uri: &LocationUri) -> Result<(String, String)> {
        let user = uri.username().unwrap_or_default();
        let mut fields = user.split(',');
        match (fields.next(), fields.next()) {
            (Some(service), Some(component)) => Ok((service.to_string(), component.to_string())),
            _ => Err(make_error(
                HANDLER_ID,
                ErrorCode::INVALID_INPUT,
                format!("{} {}:", ERROR_INVALID_USER_INFO, uri),
            )),
        }
    }

    /// Reuse the cached session for the URI's user or open a new one
    fn session(&mut self, uri: &LocationUri, text: &str) -> Result<&mut Box<dyn SecretSession>> {
        self.verify_scheme(text)?;
        let (service, component) = self.parse_user_info(uri)?;
        let key = format!("{service},{component}");

        if !self.sessions.contains_key(&key) {
            let session = self
                .provider
                .new_session("", &service, &component)
                .map_err(|err| {
                    raise_error(HANDLER_ID, ErrorCode::UNKNOWN, ERROR_CONNECT_FAIL, Cause::from_boxed(err))
                })?;
            tracing::debug!(session = %key, "opened vault session");
            self.sessions.insert(key.clone(), session);
        }

        self.sessions.get_mut(&key).ok_or_else(|| {
            make_error(HANDLER_ID, ErrorCode::INTERNAL, ERROR_CONNECT_FAIL)
        })
    }

    /// Parse the URI and get its session
    fn open(&mut self, text: &str) -> Result<(LocationUri, &mut Box<dyn SecretSession>)> {
        let uri = parse_uri(text)
            .map_err(|err| raise_error(HANDLER_ID, ErrorCode::UNKNOWN, ERROR_CONNECT_FAIL, err))?;
        let session = self
            .session(&uri, text)
            .map_err(|err| raise_error(HANDLER_ID, ErrorCode::UNKNOWN, ERROR_CONNECT_FAIL, err))?;
        Ok((uri, session))
    }
}

fn backend_error(message: &str, err: BackendError) -> platutils_core::Error {
    raise_error(HANDLER_ID, ErrorCode::UNKNOWN, message, Cause::from_boxed(err))
}

impl Handler for VaultHandler {
    fn connect(&mut self, uri: &str) -> Result<()> {
        logged("connect", HANDLER_ID, uri, || {
            self.open(uri)
                .map(|_| ())
                .map_err(|err| raise_error(HANDLER_ID, ErrorCode::UNKNOWN, "failed to connect", err))
        })
    }

    /// Store the value under [`VAULT_LOCATION_DATA`] at the URI's path
    fn put_data(&mut self, uri: &str, data: Value) -> Result<()> {
        logged("put_data", HANDLER_ID, uri, || {
            let (parts, session) = self.open(uri)?;
            let mut wrapped = Map::new();
            wrapped.insert(VAULT_LOCATION_DATA.to_string(), data);
            session
                .store_secret_by_path(parts.path(), wrapped)
                .map_err(|err| backend_error(ERROR_PUT_DATA_FAIL, err))
        })
    }

    /// Values written by `put_data` come back unwrapped, anything else as
    /// stored
    fn get_data(&mut self, uri: &str) -> Result<Value> {
        logged("get_data", HANDLER_ID, uri, || {
            let (parts, session) = self.open(uri)?;
            let mut secret = session
                .get_secret(parts.path())
                .map_err(|err| backend_error(ERROR_GET_DATA_FAIL, err))?;
            Ok(secret
                .remove(VAULT_LOCATION_DATA)
                .unwrap_or(Value::Object(secret)))
        })
    }

    fn delete_data(&mut self, uri: &str) -> Result<()> {
        logged("delete_data", HANDLER_ID, uri, || {
            let (parts, session) = self.open(uri)?;
            session
                .delete_secret(parts.path())
                .map_err(|err| backend_error(ERROR_DELETE_DATA_FAIL, err))
        })
    }

    fn list_data(&mut self, uri: &str) -> Result<Vec<String>> {
        logged_list("list_data", HANDLER_ID, uri, || {
            let (parts, session) = self.open(uri)?;
            session
                .get_secrets(parts.path())
                .map_err(|err| backend_error(ERROR_LIST_DATA_FAIL, err))
        })
    }

    fn id(&self) -> &'static str {
        HANDLER_ID
    }

    fn scheme(&self) -> &'static str {
        HANDLER_SCHEME
    }
}
