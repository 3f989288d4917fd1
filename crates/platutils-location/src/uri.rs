//! Location URIs
//!
//! `scheme://userinfo@host:port/path?query#fragment`. Only the scheme and the
//! path are required; the userinfo may be present with an empty host, as in
//! `vault://ms,mgmtsvc@/secret/app`.

use platutils_core_types::Sensitive;
use std::fmt;
use thiserror::Error;

/// Failure to parse a location URI
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("missing protocol scheme")]
    MissingScheme,

    #[error("invalid control character in uri")]
    ControlCharacter,

    #[error("invalid port {0:?} after host")]
    InvalidPort(String),
}

/// A parsed location URI
#[derive(Debug, Clone, PartialEq)]
pub struct LocationUri {
    scheme: String,
    username: Option<String>,
    password: Option<Sensitive<String>>,
    host: String,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl LocationUri {
    /// Parse a URI
    ///
    /// Text without a scheme parses with an empty scheme and the whole text
    /// as its path.
    ///
    /// # Errors
    ///
    /// Returns a `UriError` if the text holds control characters, starts
    /// with `:` or has a non-numeric port.
    pub fn parse(text: &str) -> Result<Self, UriError> {
        if text.chars().any(char::is_control) {
            return Err(UriError::ControlCharacter);
        }

        let (rest, fragment) = split_once_owned(text, '#');
        let (rest, query) = split_once_owned(rest, '?');
        let (scheme, rest) = split_scheme(rest)?;

        let mut uri = LocationUri {
            scheme: scheme.to_ascii_lowercase(),
            username: None,
            password: None,
            host: String::new(),
            port: None,
            path: String::new(),
            query,
            fragment,
        };

        let Some(after_slashes) = rest.strip_prefix("//") else {
            uri.path = rest.to_string();
            return Ok(uri);
        };

        let (authority, path) = match after_slashes.find('/') {
            Some(index) => after_slashes.split_at(index),
            None => (after_slashes, ""),
        };
        uri.path = path.to_string();

        let host_port = match authority.rfind('@') {
            Some(index) => {
                let userinfo = &authority[..index];
                match userinfo.split_once(':') {
                    Some((username, password)) => {
                        uri.username = Some(username.to_string());
                        uri.password = Some(Sensitive::new(password.to_string()));
                    }
                    None => uri.username = Some(userinfo.to_string()),
                }
                &authority[index + 1..]
            }
            None => authority,
        };

        // Port follows the last ':' outside an IPv6 literal
        match host_port.rfind(':') {
            Some(index) if !host_port[index..].contains(']') => {
                let port = &host_port[index + 1..];
                if !port.is_empty() {
                    uri.port = Some(
                        port.parse()
                            .map_err(|_| UriError::InvalidPort(port.to_string()))?,
                    );
                }
                uri.host = host_port[..index].to_string();
            }
            _ => uri.host = host_port.to_string(),
        }

        Ok(uri)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&Sensitive<String>> {
        self.password.as_ref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// Renders the URI with the password redacted
impl fmt::Display for LocationUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        let has_authority =
            self.username.is_some() || !self.host.is_empty() || self.port.is_some();
        if has_authority || !self.scheme.is_empty() {
            f.write_str("//")?;
        }
        if let Some(username) = &self.username {
            f.write_str(username)?;
            if let Some(password) = &self.password {
                write!(f, ":{}", password)?;
            }
            f.write_str("@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// A URI safe to log: parsed and redacted, or a placeholder
pub fn redact_uri(text: &str) -> String {
    LocationUri::parse(text)
        .map(|uri| uri.to_string())
        .unwrap_or_else(|_| String::from("<unparsable uri>"))
}

fn split_once_owned(text: &str, separator: char) -> (&str, Option<String>) {
    match text.split_once(separator) {
        Some((head, tail)) => (head, Some(tail.to_string())),
        None => (text, None),
    }
}

fn split_scheme(text: &str) -> Result<(&str, &str), UriError> {
    for (index, c) in text.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if index > 0 => {}
            ':' if index == 0 => return Err(UriError::MissingScheme),
            ':' => return Ok((&text[..index], &text[index + 1..])),
            // Not a scheme character: no scheme
            _ => return Ok(("", text)),
        }
    }
    Ok(("", text))
}
