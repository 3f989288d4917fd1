//! platutils goutils - general purpose helpers
//!
//! - JSON rendering and comparison with tab indentation
//! - String slice searching and order-insensitive comparison
//! - Exponential backoff delay
//! - Request dumps for debugging
//! - Caller resolution, re-exported from `platutils-core`

pub mod backoff;
pub mod json;
pub mod request;
pub mod slices;

pub use backoff::{exponential_delay, exponential_delay_with};
pub use json::{compare_as_json, json_text, pretty_json, to_json};
pub use platutils_core::caller::{callers, get_caller};
pub use request::request_debug;
pub use slices::{cast_to_string, compare_string_slices, find_in_string_slice};
