//! Pipeline result type
//!
//! Validators report their outcome as data instead of failing: a
//! [`PipeResult`] is either accepted with the (unchanged) output or rejected
//! with the issues that explain why.

use std::borrow::Cow;

use serde::Serialize;

use crate::foundation::{ValidationIssue, ValidationIssues};

/// Outcome of running a validator over one input.
///
/// Serialized untagged, so the pipeline sees either `{"output": ...}` or
/// `{"issues": [...]}`.
///
/// # Examples
///
/// ```
/// use pipecheck_validator::foundation::PipeResult;
///
/// let ok: PipeResult<&str> = PipeResult::accept("value");
/// assert_eq!(ok.output(), Some(&"value"));
///
/// let bad: PipeResult<&str> = PipeResult::issue("uuid", "Invalid UUID", "value");
/// assert_eq!(bad.issues()[0].rule, "uuid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
#[must_use = "validation result must be checked"]
pub enum PipeResult<T> {
    /// The input passed; `output` is the input itself.
    Accepted {
        /// The validated value.
        output: T,
    },
    /// The input failed; `issues` explains why.
    ///
    /// Validators build this through [`PipeResult::reject`] or
    /// [`PipeResult::issue`], which always carry one issue. Constructing the
    /// variant directly does not check that `issues` is non-empty.
    Rejected {
        /// Issues reported by the failing rule(s).
        issues: ValidationIssues,
    },
}

impl<T> PipeResult<T> {
    /// Wraps a value that passed validation.
    pub fn accept(output: T) -> Self {
        Self::Accepted { output }
    }

    /// Wraps a single issue into a rejected result.
    pub fn reject(issue: ValidationIssue) -> Self {
        Self::Rejected {
            issues: ValidationIssues::from(issue),
        }
    }

    /// Builds a rejected result with one issue for `rule`.
    pub fn issue(
        rule: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        input: impl Into<String>,
    ) -> Self {
        Self::reject(ValidationIssue::new(rule, message, input))
    }

    /// Returns true if the input was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns true if the input was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the accepted output, if any.
    #[must_use]
    pub fn output(&self) -> Option<&T> {
        match self {
            Self::Accepted { output } => Some(output),
            Self::Rejected { .. } => None,
        }
    }

    /// Returns the reported issues; empty when accepted.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Accepted { .. } => &[],
            Self::Rejected { issues } => issues.as_slice(),
        }
    }

    /// Transforms the accepted output, leaving issues untouched.
    pub fn map<U, F>(self, f: F) -> PipeResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Accepted { output } => PipeResult::Accepted { output: f(output) },
            Self::Rejected { issues } => PipeResult::Rejected { issues },
        }
    }

    /// Converts into a standard `Result` so callers can use `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipecheck_validator::foundation::{PipeResult, ValidationIssues};
    ///
    /// fn check(result: PipeResult<&str>) -> Result<usize, ValidationIssues> {
    ///     let value = result.into_result()?;
    ///     Ok(value.len())
    /// }
    ///
    /// assert_eq!(check(PipeResult::accept("abc")).ok(), Some(3));
    /// assert!(check(PipeResult::issue("uuid", "Invalid UUID", "abc")).is_err());
    /// ```
    pub fn into_result(self) -> Result<T, ValidationIssues> {
        match self {
            Self::Accepted { output } => Ok(output),
            Self::Rejected { issues } => Err(issues),
        }
    }
}

impl<T> From<PipeResult<T>> for Result<T, ValidationIssues> {
    fn from(result: PipeResult<T>) -> Self {
        result.into_result()
    }
}

// ============================================================================
// TESTS
// ============================================================================
