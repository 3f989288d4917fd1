//! Core types shared across platutils facilities
//!
//! This crate provides foundational types used by the error model, the
//! logging facility and the location handlers:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
