//! Nested causes
//!
//! A [`Cause`] is the prior failure attached to a structured [`Error`]. It is
//! classified once, when it is captured, into one of three shapes.

use super::record::Error;
use std::error::Error as StdError;
use std::fmt;

/// The prior failure that led to a structured error
#[derive(Debug)]
pub enum Cause {
    /// Another structured error
    Structured(Box<Error>),
    /// Any other standard error
    Standard(Box<dyn StdError + Send + Sync>),
    /// An arbitrary value, rendered when it was captured
    Opaque(String),
}

impl Cause {
    /// Classify a boxed standard error, unwrapping it when it is structured
    pub fn from_boxed(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<Error>() {
            Ok(structured) => Cause::Structured(structured),
            Err(standard) => Cause::Standard(standard),
        }
    }

    /// Capture an arbitrary value through its Display rendering
    pub fn opaque(value: impl fmt::Display) -> Self {
        Cause::Opaque(value.to_string())
    }

    /// Capture an arbitrary value through its Debug rendering
    pub fn debug(value: &impl fmt::Debug) -> Self {
        Cause::Opaque(format!("{:?}", value))
    }

    /// The structured error, if this cause is one
    pub fn as_structured(&self) -> Option<&Error> {
        match self {
            Cause::Structured(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Cause::Structured(_))
    }

    /// Most informative rendering of the cause
    ///
    /// Structured causes render their full report, everything else renders
    /// the same text as `Display`.
    pub fn text(&self) -> String {
        match self {
            Cause::Structured(err) => err.full_info(),
            Cause::Standard(err) => err.to_string(),
            Cause::Opaque(text) => text.clone(),
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Structured(err) => fmt::Display::fmt(err, f),
            Cause::Standard(err) => fmt::Display::fmt(err, f),
            Cause::Opaque(text) => f.write_str(text),
        }
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Cause::from_boxed(Box::new(err))
    }
}
