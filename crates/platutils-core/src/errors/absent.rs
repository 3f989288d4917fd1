//! Absent-record contract
//!
//! Code that holds an error that may not exist (`Option<Error>`,
//! `Option<&Error>`, `Option<&mut Error>`) can read and mutate it without
//! matching first. Reads on an absent record return zero values, writes
//! return [`AbsentError::NilErrorObject`].
//!
//! ```
//! use platutils_core::{AbsentError, Error, OptionalError, OptionalErrorMut};
//!
//! let mut missing: Option<Error> = None;
//! assert_eq!(missing.message(), "");
//! assert_eq!(missing.set_message("x"), Err(AbsentError::NilErrorObject));
//! ```

use super::cause::Cause;
use super::code::ErrorCode;
use super::record::Error;
use thiserror::Error as ThisError;

/// Failure returned when mutating an error that does not exist
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentError {
    #[error("called with a nil error object")]
    NilErrorObject,
}

/// Read access to an error that may be absent
pub trait OptionalError {
    /// The record, if present
    fn record(&self) -> Option<&Error>;

    fn id(&self) -> &str {
        self.record().map(Error::id).unwrap_or_default()
    }

    fn where_(&self) -> &str {
        self.record().map(Error::where_).unwrap_or_default()
    }

    /// The code, or [`ErrorCode::UNKNOWN`] when absent
    fn code(&self) -> ErrorCode {
        self.record().map(Error::code).unwrap_or_default()
    }

    fn message(&self) -> &str {
        self.record().map(Error::message).unwrap_or_default()
    }

    fn details(&self) -> &str {
        self.record().map(Error::details).unwrap_or_default()
    }

    fn recommended_actions(&self) -> &[String] {
        self.record()
            .map(Error::recommended_actions)
            .unwrap_or_default()
    }

    fn nested(&self) -> Option<&Cause> {
        self.record().and_then(Error::nested)
    }

    /// Single-line rendering, empty when absent
    fn single_line(&self) -> String {
        self.record().map(ToString::to_string).unwrap_or_default()
    }

    /// Full report, empty when absent
    fn full_info(&self) -> String {
        self.record().map(Error::full_info).unwrap_or_default()
    }
}

/// Write access to an error that may be absent
pub trait OptionalErrorMut {
    /// The record, or [`AbsentError::NilErrorObject`]
    ///
    /// # Errors
    ///
    /// Returns `NilErrorObject` when there is no record.
    fn record_mut(&mut self) -> Result<&mut Error, AbsentError>;

    /// # Errors
    ///
    /// Returns `NilErrorObject` when there is no record.
    fn set_message(&mut self, message: impl Into<String>) -> Result<(), AbsentError> {
        self.record_mut().map(|err| err.set_message(message))
    }

    /// # Errors
    ///
    /// Returns `NilErrorObject` when there is no record.
    fn add_details(&mut self, details: impl Into<String>) -> Result<(), AbsentError> {
        self.record_mut().map(|err| err.add_details(details))
    }

    /// # Errors
    ///
    /// Returns `NilErrorObject` when there is no record.
    fn add_recommended_actions<I, S>(&mut self, actions: I) -> Result<(), AbsentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record_mut()
            .map(|err| err.add_recommended_actions(actions))
    }

    /// # Errors
    ///
    /// Returns `NilErrorObject` when there is no record.
    fn add_nested_cause(&mut self, nested: impl Into<Cause>) -> Result<(), AbsentError> {
        self.record_mut().map(|err| err.add_nested_cause(nested))
    }

    /// # Errors
    ///
    /// Returns `NilErrorObject` when there is no record.
    fn infer_code(&mut self) -> Result<(), AbsentError> {
        self.record_mut().map(Error::infer_code)
    }
}

impl OptionalError for Option<Error> {
    fn record(&self) -> Option<&Error> {
        self.as_ref()
    }
}

impl OptionalError for Option<&Error> {
    fn record(&self) -> Option<&Error> {
        *self
    }
}

impl OptionalError for Option<&mut Error> {
    fn record(&self) -> Option<&Error> {
        self.as_deref()
    }
}

impl OptionalErrorMut for Option<Error> {
    fn record_mut(&mut self) -> Result<&mut Error, AbsentError> {
        self.as_mut().ok_or(AbsentError::NilErrorObject)
    }
}

impl OptionalErrorMut for Option<&mut Error> {
    fn record_mut(&mut self) -> Result<&mut Error, AbsentError> {
        self.as_deref_mut().ok_or(AbsentError::NilErrorObject)
    }
}
