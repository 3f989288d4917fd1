//! Redacting wrapper for credentials
//!
//! Location URIs may carry a password in their userinfo. Holding it in a
//! [`Sensitive`] keeps it out of log events, error text and serialized
//! reports while the handler can still read it.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text every rendering of a [`Sensitive`] value produces
pub const REDACTED: &str = "***REDACTED***";

/// A value rendered as [`REDACTED`] by `Debug`, `Display` and `Serialize`
///
/// ```
/// use platutils_core_types::Sensitive;
///
/// let password = Sensitive::new(String::from("s3cr3t"));
/// assert_eq!(format!("{password:?} {password}"), "***REDACTED*** ***REDACTED***");
/// assert_eq!(password.expose(), "s3cr3t");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped value, for handing to a backend
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Transform the wrapped value without exposing it
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sensitive<U> {
        Sensitive(f(self.0))
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct UserInfo {
        username: String,
        password: Sensitive<String>,
    }

    fn user_info() -> UserInfo {
        UserInfo {
            username: "ms,mgmtsvc".to_string(),
            password: Sensitive::from("hunter2".to_string()),
        }
    }

    #[test]
    fn test_debug_dump_hides_password() {
        let dump = format!("{:?}", user_info());
        assert!(dump.contains("ms,mgmtsvc"));
        assert!(dump.contains(REDACTED));
        assert!(!dump.contains("hunter2"));
    }

    #[test]
    fn test_serialized_report_hides_password() {
        let json = serde_json::to_value(user_info()).unwrap();
        assert_eq!(json["username"], "ms,mgmtsvc");
        assert_eq!(json["password"], REDACTED);
    }

    #[test]
    fn test_map_keeps_value_wrapped() {
        let length = Sensitive::new("hunter2").map(str::len);
        assert_eq!(length.to_string(), REDACTED);
        assert_eq!(length.into_inner(), 7);
    }

    #[test]
    fn test_equality_uses_wrapped_value() {
        assert_eq!(Sensitive::new(1), Sensitive::new(1));
        assert_ne!(Sensitive::new(1), Sensitive::new(2));
        assert_eq!(Sensitive::<String>::default().expose(), "");
    }
}
