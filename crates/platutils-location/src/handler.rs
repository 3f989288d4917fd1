//! Location handler contract
//!
//! A handler reads and writes values at paths of a backend selected by the
//! scheme of a location URI. Values are JSON documents.

use crate::uri::{redact_uri, LocationUri};
use platutils_core::{log_op_end, log_op_error, log_op_start, make_error, raise_error};
use platutils_core::{ErrorCode, Result};
use serde_json::Value;
use std::time::Instant;

// Error strings shared by all handlers
pub const ERROR_URI_SCHEME_MISMATCH: &str = "wrong uri scheme";
pub const ERROR_URI_PARSE_FAIL: &str = "failed to parse uri";
pub const ERROR_GET_DATA_FAIL: &str = "failed to get data from backend";
pub const ERROR_DELETE_DATA_FAIL: &str = "failed to delete data from backend";
pub const ERROR_LIST_DATA_FAIL: &str = "failed to list data from backend";
pub const ERROR_PUT_DATA_FAIL: &str = "failed to put data to backend";
pub const ERROR_NOT_IMPLEMENTED: &str = "handler scheme is not yet implemented";

/// A location backend
///
/// # Errors
///
/// Every operation fails with a structured error when the URI does not
/// parse, names another scheme, or the backend rejects the operation.
pub trait Handler: Send {
    /// Set up a session for the URI, reused by later operations
    fn connect(&mut self, uri: &str) -> Result<()>;

    fn put_data(&mut self, uri: &str, data: Value) -> Result<()>;

    fn get_data(&mut self, uri: &str) -> Result<Value>;

    fn delete_data(&mut self, uri: &str) -> Result<()>;

    /// Names of the items directly under the URI's path
    fn list_data(&mut self, uri: &str) -> Result<Vec<String>>;

    /// Text representation of the handler
    fn id(&self) -> &'static str;

    /// The scheme the handler manages
    fn scheme(&self) -> &'static str;

    /// Check that a URI parses and names this handler's scheme
    fn verify_scheme(&self, uri: &str) -> Result<()> {
        let parts = parse_uri(uri)?;
        if parts.scheme() != self.scheme() {
            return Err(make_error(
                self.id(),
                ErrorCode::INVALID_INPUT,
                format!("{} {}:", ERROR_URI_SCHEME_MISMATCH, self.scheme()),
            ));
        }
        Ok(())
    }
}

/// Parse a URI, failing with a structured error
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error naming the URI when it does not parse.
pub fn parse_uri(uri: &str) -> Result<LocationUri> {
    LocationUri::parse(uri).map_err(|err| {
        raise_error(
            "",
            ErrorCode::INVALID_INPUT,
            format!("{} {}", ERROR_URI_PARSE_FAIL, uri),
            err,
        )
    })
}

/// Run a handler operation between start and end events
pub(crate) fn logged<T>(
    op: &'static str,
    handler: &'static str,
    uri: &str,
    operation: impl FnOnce() -> Result<T>,
) -> Result<T> {
    run_logged(op, handler, uri, operation, |_| None)
}

/// [`logged`] for listings; the end event also records `item_count`
pub(crate) fn logged_list(
    op: &'static str,
    handler: &'static str,
    uri: &str,
    operation: impl FnOnce() -> Result<Vec<String>>,
) -> Result<Vec<String>> {
    run_logged(op, handler, uri, operation, |items| Some(items.len() as u64))
}

fn run_logged<T>(
    op: &'static str,
    handler: &'static str,
    uri: &str,
    operation: impl FnOnce() -> Result<T>,
    item_count: fn(&T) -> Option<u64>,
) -> Result<T> {
    let redacted = redact_uri(uri);
    log_op_start!(op, handler = handler, uri = %redacted);
    let start = Instant::now();

    let result = operation().map_err(|e| {
        log_op_error!(
            op,
            e,
            duration_ms = start.elapsed().as_millis() as u64,
            handler = handler,
            uri = %redacted
        );
        e
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        handler = handler,
        uri = %redacted,
        item_count = item_count(&result)
    );

    Ok(result)
}
