//! Error codes
//!
//! Codes reuse the HTTP status numbering plus one private sentinel,
//! [`ErrorCode::UNKNOWN`], for errors that cannot be categorized.

use std::fmt;

/// Numeric status code carried by every structured error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// The error cannot be categorized
    pub const UNKNOWN: ErrorCode = ErrorCode(466);
    /// A problem with the request
    pub const BAD_REQUEST: ErrorCode = ErrorCode(400);
    /// The caller is not authorized to perform the operation
    pub const UNAUTHORIZED: ErrorCode = ErrorCode(401);
    /// The item specified is not found
    pub const NOT_FOUND: ErrorCode = ErrorCode(404);
    /// This operation is not allowed
    pub const NOT_ALLOWED: ErrorCode = ErrorCode(406);
    /// Failure due to an unexpected duplicate
    pub const DUPLICATE_ENTRY: ErrorCode = ErrorCode(409);
    /// One or more input items are invalid
    pub const INVALID_INPUT: ErrorCode = ErrorCode(422);
    /// Internal error
    pub const INTERNAL: ErrorCode = ErrorCode(500);
    /// The requested information or action is not implemented
    pub const NOT_IMPLEMENTED: ErrorCode = ErrorCode(501);
    /// The service is unavailable at present
    pub const SERVICE_UNAVAILABLE: ErrorCode = ErrorCode(503);

    /// Wrap a raw numeric code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The raw numeric code
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Display text for this code, empty if the code is not defined
    pub fn text(&self) -> &'static str {
        code_text(self.0)
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Codes with no HTTP reason phrase that still have display text
const DOMAIN_TEXT: &[(u16, &str)] = &[(466, "Unknown Error")];

/// Display text for a numeric code
///
/// Looks up the HTTP reason phrase first, then the domain table, and returns
/// the empty string when neither defines the code.
pub fn code_text(code: u16) -> &'static str {
    if let Some(reason) = http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
    {
        return reason;
    }

    DOMAIN_TEXT
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
        .unwrap_or("")
}
