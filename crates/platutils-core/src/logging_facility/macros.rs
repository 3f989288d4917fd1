//! Canonical logging macros
//!
//! Every event carries `component`, `op` and `event`. Failure events add the
//! code, origin and subject id of the structured error.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use platutils_core::log_op_start;
/// log_op_start!("get_data");
/// log_op_start!("get_data", path = "/secret/app");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use platutils_core::log_op_end;
/// log_op_end!("get_data", duration_ms = 42);
/// log_op_end!("list_data", duration_ms = 3, item_count = 7);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log the failure of an operation with a structured error
///
/// # Example
///
/// ```
/// # use platutils_core::{log_op_error, make_error, ErrorCode};
/// let err = make_error("app", ErrorCode::NOT_FOUND, "no data at: /secret/app");
/// log_op_error!("get_data", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::Error = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = err.code().as_u16(),
            err.where = err.where_(),
            err.id = err.id(),
            err.message = err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::Error = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.code = err.code().as_u16(),
            err.where = err.where_(),
            err.id = err.id(),
            err.message = err.message(),
            $($field)*
        );
    }};
}
