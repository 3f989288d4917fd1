//! platutils core - structured errors with caller tracking
//!
//! This crate provides the error model shared by every platutils crate:
//! - `Error`, a structured record with code, message, details, recommended
//!   actions, origin location and a single nested cause
//! - Caller resolution producing `"<function>() - <file>(<line>)"` stamps
//! - Structural, line-insensitive error comparison
//! - Rendering of errors and arbitrary values (`error_text!`)
//! - The structured logging facility used by the collaborator crates

pub mod caller;
pub mod errors;
pub mod logging_facility;
pub mod where_cmp;

#[doc(hidden)]
pub use platutils_core_types as core_types;

// Re-export commonly used types
pub use caller::{callers, get_caller, CallerError};
pub use errors::{
    code_text, compare_errors, make_error, make_error_at, raise_error, raise_error_at,
    AbsentError, Cause, CodeInference, CodeRule, Error, ErrorCode, ErrorLike, OptionalError,
    OptionalErrorMut, PermissionErrorRule, Result,
};
pub use where_cmp::{compare_where, compare_where_list};
