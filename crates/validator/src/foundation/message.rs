//! Configurable error messages
//!
//! A validator can be configured with a literal message or with a closure
//! that builds the message from the rejected input. Closures run only when
//! a rejection actually happens.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Message attached to an issue when a validator rejects its input.
///
/// # Examples
///
/// ```
/// use pipecheck_validator::foundation::ErrorMessage;
///
/// let fixed = ErrorMessage::from("bad id");
/// assert_eq!(fixed.resolve("xyz"), "bad id");
///
/// let computed = ErrorMessage::lazy(|input| format!("'{input}' is not an id"));
/// assert_eq!(computed.resolve("xyz"), "'xyz' is not an id");
/// ```
#[derive(Clone)]
pub enum ErrorMessage {
    /// A literal message.
    Text(Cow<'static, str>),
    /// A message computed from the offending input.
    Lazy(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl ErrorMessage {
    /// Creates a literal message.
    pub fn text(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(message.into())
    }

    /// Creates a message that is computed from the rejected input.
    pub fn lazy<F>(build: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(build))
    }

    /// Resolves the message for a rejected `input`.
    ///
    /// Literal messages are returned without allocating when they are static.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Cow<'static, str> {
        match self {
            Self::Text(message) => message.clone(),
            Self::Lazy(build) => Cow::Owned(build(input)),
        }
    }

    /// Returns true if the message is computed from the input.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(message) => f.debug_tuple("Text").field(message).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<&'static str> for ErrorMessage {
    fn from(message: &'static str) -> Self {
        Self::Text(Cow::Borrowed(message))
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        Self::Text(Cow::Owned(message))
    }
}

impl From<Cow<'static, str>> for ErrorMessage {
    fn from(message: Cow<'static, str>) -> Self {
        Self::Text(message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
