//! platutils location - pluggable key/value backends addressed by URI
//!
//! A location is a URI, `scheme://userinfo@host:port/path?query#fragment`.
//! The scheme selects the handler:
//! - `memory`: in-process map, for tests and local tooling
//! - `vault`: secrets vault, userinfo `<service>,<component>`
//!
//! ```
//! use platutils_location::select_handler;
//! use serde_json::json;
//!
//! let mut handler = select_handler("memory:///secret/app").unwrap();
//! handler.put_data("memory:///secret/app/db", json!({"user": "app"})).unwrap();
//! assert_eq!(handler.list_data("memory:///secret/app").unwrap(), ["db"]);
//! ```

pub mod factory;
pub mod handler;
pub mod memory;
pub mod uri;
pub mod vault;

pub use factory::select_handler;
pub use handler::Handler;
pub use memory::{MemoryHandler, PathInfo};
pub use uri::{LocationUri, UriError};
pub use vault::{SecretSession, SessionProvider, UnconfiguredProvider, VaultHandler};
