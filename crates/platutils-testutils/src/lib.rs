//! platutils testutils - scaffolding for table-driven tests
//!
//! - [`framework`]: test definitions with overridable prep, check and report
//! - [`utils`]: where-string, string-array and buffer helpers
//! - [`logs`]: capture of JSON log output and log-record assertions

pub mod framework;
pub mod logs;
pub mod utils;

pub use framework::{fail_tests, DefTest, TestSuite};
pub use logs::{capture_json_logs, contains_log_records, strip_log_records, LogRec};
pub use utils::{
    compare_items, compare_where, compare_where_list, contains_string_array, display_strings,
    read_buf, remove_bottom, set_env, unset_env,
};
