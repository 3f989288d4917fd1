//! Structured error facility
//!
//! Every error raised by a platutils crate is an [`Error`]: a record of an
//! error condition stamped with the location it was created at. Errors are
//! built with [`make_error`] / [`raise_error`] (location taken from the
//! caller) or their `_at` variants (location supplied explicitly), then
//! optionally enriched by the creating call site before being returned.
//!
//! ```
//! use platutils_core::{make_error, raise_error, ErrorCode};
//!
//! let cause = make_error("ctx-1", ErrorCode::INVALID_INPUT, "page size must be positive");
//! let err = raise_error("ctx-1", ErrorCode::UNKNOWN, "failed to list items", cause);
//!
//! // The structured cause lends its code to the new error
//! assert_eq!(err.code(), ErrorCode::INVALID_INPUT);
//! assert!(err.full_info().contains("Nested Errors..."));
//! ```

mod absent;
mod cause;
mod code;
mod compare;
mod inference;
mod record;
pub mod text;

pub use absent::{AbsentError, OptionalError, OptionalErrorMut};
pub use cause::Cause;
pub use code::{code_text, ErrorCode};
pub use compare::{compare_errors, ErrorLike};
pub use inference::{CodeInference, CodeRule, PermissionErrorRule};
pub use record::{make_error, make_error_at, raise_error, raise_error_at, Error};

/// Result type alias using the structured Error
pub type Result<T> = std::result::Result<T, Error>;
