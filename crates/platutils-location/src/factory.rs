use crate::handler::{parse_uri, Handler, ERROR_URI_PARSE_FAIL};
use crate::memory::{self, MemoryHandler};
use crate::vault::{self, VaultHandler};
use platutils_core::{code_text, make_error, raise_error, ErrorCode, Result};

pub const FACTORY_ID: &str = "location factory";

/// The handler for the scheme of a URI
///
/// Each call returns a new handler. A memory handler starts with an empty
/// store of its own, so values put through one selection are not visible
/// through another; keep the returned handler to reuse its data.
///
/// Vault handlers returned here use the unconfigured session provider;
/// build one with [`VaultHandler::new`] to reach a real backend.
///
/// # Errors
///
/// Returns an error if the URI does not parse, or an `INVALID_INPUT` error
/// if no handler implements its scheme.
pub fn select_handler(uri: &str) -> Result<Box<dyn Handler>> {
    let parts = parse_uri(uri).map_err(|err| {
        raise_error(
            FACTORY_ID,
            ErrorCode::UNKNOWN,
            format!("{} {}:", uri, ERROR_URI_PARSE_FAIL),
            err,
        )
    })?;

    match parts.scheme() {
        vault::HANDLER_SCHEME => Ok(Box::new(VaultHandler::default())),
        memory::HANDLER_SCHEME => Ok(Box::new(MemoryHandler::new())),
        scheme => Err(make_error(
            FACTORY_ID,
            ErrorCode::INVALID_INPUT,
            format!("{} {}:", code_text(ErrorCode::NOT_IMPLEMENTED.as_u16()), scheme),
        )),
    }
}
