//! Canonical UUID validator.
//!
//! Checks the textual layout `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` only.
//! Version and variant nibbles are not inspected.

use serde::Deserialize;

use crate::foundation::{ErrorMessage, PipeResult, Validate};

/// Rule name reported in issues.
pub const RULE: &str = "uuid";

/// Message used when no override is configured.
pub const DEFAULT_MESSAGE: &str = "Invalid UUID";

const CANONICAL_LEN: usize = 36;
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

// ============================================================================
// UUID VALIDATOR
// ============================================================================

/// Validates canonical UUID strings.
///
/// Accepted: exactly 36 characters, five groups of ASCII hex digits of
/// lengths 8-4-4-4-12 separated by `-`. Letter case is free and preserved.
/// Braces, `urn:uuid:` prefixes, surrounding whitespace and the 32-digit
/// form without hyphens are rejected.
///
/// # Examples
///
/// ```
/// use pipecheck_validator::foundation::Validate;
/// use pipecheck_validator::validators::Uuid;
///
/// let validator = Uuid::new();
///
/// let input = "123E4567-e89b-12d3-A456-426614174000";
/// assert_eq!(validator.validate(input).output(), Some(&input));
///
/// let rejected = validator.validate("123e4567e89b12d3a456426614174000");
/// assert_eq!(rejected.issues()[0].rule, "uuid");
/// assert_eq!(rejected.issues()[0].message, "Invalid UUID");
///
/// let custom = Uuid::with_message("bad id");
/// assert_eq!(custom.validate("not-a-uuid").issues()[0].message, "bad id");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Uuid {
    message: Option<ErrorMessage>,
}

impl Uuid {
    /// Creates a validator that reports the default message.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Creates a validator that reports `message` instead of the default.
    ///
    /// An empty literal message reports the default instead.
    #[must_use]
    pub fn with_message(message: impl Into<ErrorMessage>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Creates a validator from deserialized options.
    #[must_use]
    pub fn from_options(options: UuidOptions) -> Self {
        Self {
            message: options.message.map(ErrorMessage::from),
        }
    }

    /// Returns the configured message override, if any.
    #[must_use]
    pub fn message(&self) -> Option<&ErrorMessage> {
        self.message.as_ref()
    }

    /// Returns true if `input` has the canonical 8-4-4-4-12 layout.
    #[must_use]
    pub fn is_canonical(input: &str) -> bool {
        input.len() == CANONICAL_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if HYPHENS.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }
}

impl Validate for Uuid {
    type Input = str;

    fn validate<'a>(&self, input: &'a str) -> PipeResult<&'a str> {
        if Self::is_canonical(input) {
            return PipeResult::accept(input);
        }

        tracing::trace!(rule = RULE, input_len = input.len(), "input rejected");

        // An empty literal falls back to the default; lazy messages are kept as built.
        let message = match &self.message {
            Some(ErrorMessage::Text(text)) if text.is_empty() => DEFAULT_MESSAGE.into(),
            Some(message) => message.resolve(input),
            None => DEFAULT_MESSAGE.into(),
        };
        PipeResult::issue(RULE, message, input)
    }
}

/// Creates a UUID validator with the default message.
#[must_use]
pub const fn uuid() -> Uuid {
    Uuid::new()
}

/// Creates a UUID validator with a custom message.
#[must_use]
pub fn uuid_with_message(message: impl Into<ErrorMessage>) -> Uuid {
    Uuid::with_message(message)
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Data-driven configuration for [`Uuid`].
///
/// ```
/// use pipecheck_validator::validators::{Uuid, UuidOptions};
///
/// let options: UuidOptions = serde_json::from_str(r#"{"message": "bad id"}"#).unwrap();
/// let validator = Uuid::from_options(options);
/// assert!(validator.message().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UuidOptions {
    /// Message override; `None` or an empty string keeps the default.
    pub message: Option<String>,
}

impl From<UuidOptions> for Uuid {
    fn from(options: UuidOptions) -> Self {
        Self::from_options(options)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationIssue;

    #[test]
    fn test_valid_uuids() {
        let validator = Uuid::new();
        for input in [
            "123e4567-e89b-12d3-a456-426614174000",
            "550e8400-e29b-41d4-a716-446655440000",
            "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
        ] {
            assert_eq!(validator.validate(input), PipeResult::accept(input));
        }
    }

    #[test]
    fn test_case_preserved() {
        let validator = Uuid::new();
        let input = "123e4567-E89B-12d3-A456-426614174000";
        let result = validator.validate(input);
        assert_eq!(result.output().copied(), Some(input));
        assert!(std::ptr::eq(*result.output().unwrap(), input));
    }

    #[test]
    fn test_ignores_version_and_variant() {
        let validator = Uuid::new();
        // version nibble 0, variant nibble 0
        assert!(
            validator
                .validate("123e4567-e89b-02d3-0456-426614174000")
                .is_accepted()
        );
        // version nibble f, variant nibble f
        assert!(
            validator
                .validate("123e4567-e89b-f2d3-f456-426614174000")
                .is_accepted()
        );
    }

    #[test]
    fn test_non_canonical_forms() {
        let validator = Uuid::new();
        for input in [
            "{123e4567-e89b-12d3-a456-426614174000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            " 123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-426614174000\n",
            "123e4567e89b12d3a456426614174000",
            "123e4567-e89b12d3-a456-426614174000-",
        ] {
            assert!(validator.validate(input).is_rejected(), "{input:?}");
        }
    }

    #[test]
    fn test_wrong_group_lengths() {
        let validator = Uuid::new();
        assert!(
            validator
                .validate("123e456-7e89b-12d3-a456-426614174000")
                .is_rejected()
        );
        assert!(
            validator
                .validate("123e4567-e89b-12d3-a4564-26614174000")
                .is_rejected()
        );
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        let validator = Uuid::new();
        // fullwidth digit: 36 chars, 38 bytes
        assert!(
            validator
                .validate("１23e4567-e89b-12d3-a456-426614174000")
                .is_rejected()
        );
        // two-byte letter: 36 bytes, 35 chars
        assert!(
            validator
                .validate("123e4567-e89b-12d3-a456-4266141740é")
                .is_rejected()
        );
        // non-hex letter
        assert!(
            validator
                .validate("123g4567-e89b-12d3-a456-426614174000")
                .is_rejected()
        );
    }

    #[test]
    fn test_default_issue() {
        let result = uuid().validate("");
        assert_eq!(
            result,
            PipeResult::reject(ValidationIssue::new(RULE, DEFAULT_MESSAGE, ""))
        );
    }

    #[test]
    fn test_custom_message() {
        let result = uuid_with_message("bad id").validate("not-a-uuid");
        assert_eq!(result.issues()[0].message, "bad id");
        assert_eq!(result.issues()[0].input, "not-a-uuid");
    }

    #[test]
    fn test_lazy_message() {
        let validator =
            Uuid::with_message(ErrorMessage::lazy(|input| format!("'{input}' is not a UUID")));
        let result = validator.validate("abc");
        assert_eq!(result.issues()[0].message, "'abc' is not a UUID");
    }

    #[test]
    fn test_options() {
        let validator = Uuid::from(UuidOptions {
            message: Some("from config".to_string()),
        });
        assert_eq!(validator.validate("x").issues()[0].message, "from config");

        let defaulted = Uuid::from_options(UuidOptions::default());
        assert!(defaulted.message().is_none());
        assert_eq!(defaulted.validate("x").issues()[0].message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_empty_message_uses_default() {
        let result = uuid_with_message("").validate("not-a-uuid");
        assert_eq!(result.issues()[0].message, DEFAULT_MESSAGE);

        let from_options = Uuid::from_options(UuidOptions {
            message: Some(String::new()),
        });
        assert_eq!(
            from_options.validate("not-a-uuid").issues()[0].message,
            DEFAULT_MESSAGE
        );
    }

    #[test]
    fn test_lazy_message_only_built_on_rejection() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let validator = Uuid::with_message(ErrorMessage::lazy(move |input| {
            counter.fetch_add(1, Ordering::SeqCst);
            format!("bad: {input}")
        }));

        assert!(
            validator
                .validate("123e4567-e89b-12d3-a456-426614174000")
                .is_accepted()
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let result = validator.validate("nope");
        assert_eq!(result.issues()[0].message, "bad: nope");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
