//! Fallible cleanup

use std::fmt::Display;

/// Run a fallible close, logging a warning when it fails
///
/// For cleanup on paths that have already produced their result, where a
/// close failure must not replace it.
///
/// # Example
///
/// ```
/// use platutils_core::logging_facility::close_warn;
///
/// close_warn(|| Err::<(), _>("connection reset"));
/// ```
pub fn close_warn<F, E>(close: F)
where
    F: FnOnce() -> Result<(), E>,
    E: Display,
{
    if let Err(err) = close() {
        tracing::warn!("close failed: {err}");
    }
}
