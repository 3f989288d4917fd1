//! Structured logging facility for platutils
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//! - `close_warn` for fallible cleanup whose failure is only worth a warning
//!
//! # Usage
//!
//! ```rust
//! use platutils_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation failure with
//!   the code, origin and subject of the structured error

pub mod close;
pub mod init;
pub mod macros;
pub mod test_capture;

pub use close::close_warn;
pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
