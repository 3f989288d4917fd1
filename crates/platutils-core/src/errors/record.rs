use super::cause::Cause;
use super::code::ErrorCode;
use super::inference::CodeInference;
use crate::caller::where_for;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

/// Structured error record
///
/// Carries a code, a message, an optional subject id, optional details and
/// recommended actions, the location it was created at and at most one
/// nested cause.
#[derive(Debug)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: String,
    recommended_actions: Vec<String>,
    where_: String,
    id: String,
    nested: Option<Cause>,
}

// ===== Constructors =====

/// Create an error stamped with the location of the caller
#[track_caller]
pub fn make_error(id: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Error {
    let location = Location::caller();
    make_error_at(id, code, message, where_for(location, true))
}

/// Create an error with an explicit location string
pub fn make_error_at(
    id: impl Into<String>,
    code: ErrorCode,
    message: impl Into<String>,
    where_: impl Into<String>,
) -> Error {
    let mut err = Error {
        code,
        message: message.into(),
        details: String::new(),
        recommended_actions: Vec::new(),
        where_: where_.into(),
        id: id.into(),
        nested: None,
    };
    err.infer_code();
    err
}

/// Create an error from a prior failure, stamped with the location of the
/// caller
///
/// A structured cause lends its code to the new error and is kept as the
/// nested cause. Any other cause is folded into the message as
/// `"{message}, {cause}"` and not kept.
#[track_caller]
pub fn raise_error(
    id: impl Into<String>,
    code: ErrorCode,
    message: impl Into<String>,
    nested: impl Into<Cause>,
) -> Error {
    let location = Location::caller();
    raise_error_at(id, code, message, where_for(location, true), nested)
}

/// Create an error from a prior failure with an explicit location string
pub fn raise_error_at(
    id: impl Into<String>,
    code: ErrorCode,
    message: impl Into<String>,
    where_: impl Into<String>,
    nested: impl Into<Cause>,
) -> Error {
    let message = message.into();
    match nested.into() {
        Cause::Structured(prior) => {
            let mut err = make_error_at(id, prior.code, message, where_);
            err.nested = Some(Cause::Structured(prior));
            err
        }
        other => make_error_at(id, code, format!("{message}, {other}"), where_),
    }
}

impl Error {
    // ===== Accessors =====

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location the error was created at
    pub fn where_(&self) -> &str {
        &self.where_
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn recommended_actions(&self) -> &[String] {
        &self.recommended_actions
    }

    pub fn nested(&self) -> Option<&Cause> {
        self.nested.as_ref()
    }

    // ===== Mutators =====

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Replace the details text
    pub fn add_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    /// Append actions, in order, to the recommended actions
    pub fn add_recommended_actions<I, S>(&mut self, actions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommended_actions
            .extend(actions.into_iter().map(Into::into));
    }

    /// Attach a nested cause, replacing any previous one
    pub fn add_nested_cause(&mut self, nested: impl Into<Cause>) {
        self.nested = Some(nested.into());
    }

    /// Rewrite the code using the default inference rules
    pub fn infer_code(&mut self) {
        self.infer_code_with(CodeInference::shared());
    }

    /// Rewrite the code using a custom rule set
    pub fn infer_code_with(&mut self, inference: &CodeInference) {
        self.code = inference.infer(self.code, &self.message);
    }

    // ===== Builders =====

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.add_details(details);
        self
    }

    pub fn with_recommended_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_recommended_actions(actions);
        self
    }

    pub fn with_nested_cause(mut self, nested: impl Into<Cause>) -> Self {
        self.add_nested_cause(nested);
        self
    }

    // ===== Rendering =====

    /// Full multi-line report
    ///
    /// The single-line form, then the details, the recommended actions and
    /// the full report of the nested cause, each only when present.
    pub fn full_info(&self) -> String {
        let mut text = self.to_string();

        if !self.details.is_empty() {
            text.push('\n');
            text.push_str(&self.details);
        }

        if !self.recommended_actions.is_empty() {
            text.push_str("\nRecommended actions...");
            for action in &self.recommended_actions {
                text.push('\n');
                text.push_str(action);
            }
        }

        if let Some(nested) = &self.nested {
            text.push_str("\nNested Errors...\n");
            text.push_str(&nested.text());
        }

        text
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.id.is_empty() { "" } else { " " };
        write!(
            f,
            "{}{}{} {} {}",
            self.where_,
            separator,
            self.id,
            self.code.text(),
            self.message
        )
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.nested {
            Some(Cause::Structured(err)) => Some(&**err),
            Some(Cause::Standard(err)) => Some(&**err),
            _ => None,
        }
    }
}
