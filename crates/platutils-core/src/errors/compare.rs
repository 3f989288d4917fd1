//! Error comparison
//!
//! Structured errors compare field by field, ignoring the line number in
//! their location. Anything else compares by its single-line text.

use super::cause::Cause;
use super::record::Error;
use crate::where_cmp::compare_where;
use std::error::Error as StdError;

/// A value that can take part in an error comparison
pub trait ErrorLike {
    /// The structured record, when the value is one
    fn as_structured(&self) -> Option<&Error>;

    /// Single-line text used when the values are not both structured
    fn single_line(&self) -> String;
}

impl ErrorLike for Error {
    fn as_structured(&self) -> Option<&Error> {
        Some(self)
    }

    fn single_line(&self) -> String {
        self.to_string()
    }
}

impl ErrorLike for Cause {
    fn as_structured(&self) -> Option<&Error> {
        Cause::as_structured(self)
    }

    fn single_line(&self) -> String {
        self.to_string()
    }
}

impl ErrorLike for dyn StdError + 'static {
    fn as_structured(&self) -> Option<&Error> {
        self.downcast_ref::<Error>()
    }

    fn single_line(&self) -> String {
        self.to_string()
    }
}

impl ErrorLike for dyn StdError + Send + Sync + 'static {
    fn as_structured(&self) -> Option<&Error> {
        self.downcast_ref::<Error>()
    }

    fn single_line(&self) -> String {
        self.to_string()
    }
}

/// Compare two possibly absent errors
///
/// Two absent errors are equal, an absent and a present one are not. Two
/// structured errors are compared structurally, any other pair by text.
pub fn compare_errors<A, B>(one: Option<&A>, two: Option<&B>) -> bool
where
    A: ErrorLike + ?Sized,
    B: ErrorLike + ?Sized,
{
    match (one, two) {
        (None, None) => true,
        (Some(one), Some(two)) => match (one.as_structured(), two.as_structured()) {
            (Some(one), Some(two)) => compare_structured(one, two),
            _ => one.single_line() == two.single_line(),
        },
        _ => false,
    }
}

fn compare_structured(one: &Error, two: &Error) -> bool {
    if one.code() != two.code()
        || one.message() != two.message()
        || one.id() != two.id()
        || one.details() != two.details()
        || !compare_where(one.where_(), two.where_())
        || one.recommended_actions() != two.recommended_actions()
    {
        return false;
    }

    match (one.nested(), two.nested()) {
        (None, None) => true,
        (Some(one), Some(two)) => match (one.as_structured(), two.as_structured()) {
            (Some(one), Some(two)) => compare_structured(one, two),
            (None, None) => one.to_string() == two.to_string(),
            // One structured, one not
            _ => false,
        },
        _ => false,
    }
}
