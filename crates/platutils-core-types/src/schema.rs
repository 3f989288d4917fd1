//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Location identifiers
pub const FIELD_HANDLER: &str = "handler";
pub const FIELD_URI: &str = "uri";

// Cluster object identifiers
pub const FIELD_KIND: &str = "kind";
pub const FIELD_NAMESPACE: &str = "namespace";
pub const FIELD_OBJECT: &str = "object";

// Collection sizes
pub const FIELD_ITEM_COUNT: &str = "item_count";

// Error fields
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_WHERE: &str = "err.where";
pub const FIELD_ERR_ID: &str = "err.id";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
