//! Code inference
//!
//! Rules that rewrite a code from the content of the message after an error
//! is constructed. The default rule set holds exactly one rule: an
//! [`ErrorCode::UNKNOWN`] error whose message mentions `"permission error"`
//! becomes [`ErrorCode::UNAUTHORIZED`].
//!
//! The permission rule is a plain substring match. It is kept as is and is
//! not extended to other wordings.

use super::code::ErrorCode;
use std::sync::OnceLock;

/// A single code inference rule
pub trait CodeRule: Send + Sync {
    /// The rewritten code, or `None` when the rule does not apply
    fn infer(&self, code: ErrorCode, message: &str) -> Option<ErrorCode>;
}

/// Unknown errors that mention a permission error are unauthorized
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissionErrorRule;

impl PermissionErrorRule {
    pub const NEEDLE: &'static str = "permission error";
}

impl CodeRule for PermissionErrorRule {
    fn infer(&self, code: ErrorCode, message: &str) -> Option<ErrorCode> {
        (code == ErrorCode::UNKNOWN && message.contains(Self::NEEDLE))
            .then_some(ErrorCode::UNAUTHORIZED)
    }
}

/// Ordered set of rules; the first rule that applies wins
pub struct CodeInference {
    rules: Vec<Box<dyn CodeRule>>,
}

static DEFAULT_INFERENCE: OnceLock<CodeInference> = OnceLock::new();

impl CodeInference {
    /// A rule set with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The default rule set shared by every constructor
    pub fn shared() -> &'static CodeInference {
        DEFAULT_INFERENCE.get_or_init(CodeInference::default)
    }

    pub fn with_rule(mut self, rule: impl CodeRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the rules to a code and message
    pub fn infer(&self, code: ErrorCode, message: &str) -> ErrorCode {
        self.rules
            .iter()
            .find_map(|rule| rule.infer(code, message))
            .unwrap_or(code)
    }
}

impl Default for CodeInference {
    fn default() -> Self {
        Self::empty().with_rule(PermissionErrorRule)
    }
}

impl std::fmt::Debug for CodeInference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeInference")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotFoundRule;

    impl CodeRule for NotFoundRule {
        fn infer(&self, code: ErrorCode, message: &str) -> Option<ErrorCode> {
            (code == ErrorCode::UNKNOWN && message.starts_with("no such"))
                .then_some(ErrorCode::NOT_FOUND)
        }
    }

    #[test]
    fn test_default_set_has_only_permission_rule() {
        let inference = CodeInference::default();
        assert_eq!(inference.len(), 1);
        assert_eq!(
            inference.infer(ErrorCode::UNKNOWN, "a permission error occurred"),
            ErrorCode::UNAUTHORIZED
        );
        assert_eq!(
            inference.infer(ErrorCode::UNKNOWN, "no such file"),
            ErrorCode::UNKNOWN
        );
    }

    #[test]
    fn test_permission_rule_only_rewrites_unknown() {
        let inference = CodeInference::shared();
        assert_eq!(
            inference.infer(ErrorCode::BAD_REQUEST, "permission error"),
            ErrorCode::BAD_REQUEST
        );
        // Case sensitive
        assert_eq!(
            inference.infer(ErrorCode::UNKNOWN, "Permission Error"),
            ErrorCode::UNKNOWN
        );
    }

    #[test]
    fn test_custom_rule_set() {
        let inference = CodeInference::empty().with_rule(NotFoundRule);
        assert_eq!(
            inference.infer(ErrorCode::UNKNOWN, "no such file"),
            ErrorCode::NOT_FOUND
        );
        assert_eq!(
            inference.infer(ErrorCode::UNKNOWN, "permission error"),
            ErrorCode::UNKNOWN
        );
        assert!(CodeInference::empty().is_empty());
    }
}
