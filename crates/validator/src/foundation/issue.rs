//! Issue records for rejected inputs
//!
//! An issue names the rule that failed, carries the resolved message, and
//! keeps a copy of the offending input for diagnostics.
//!
//! Rule names and default messages are `Cow<'static, str>` so the common case
//! of static strings does not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ISSUE
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```
/// use pipecheck_validator::foundation::ValidationIssue;
///
/// let issue = ValidationIssue::new("uuid", "Invalid UUID", "not-a-uuid");
/// assert_eq!(issue.rule, "uuid");
/// assert_eq!(issue.to_string(), "uuid: Invalid UUID (input: \"not-a-uuid\")");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationIssue {
    /// Name of the rule that rejected the input, e.g. `"uuid"`.
    pub rule: Cow<'static, str>,

    /// Human-readable message, either the rule default or a configured override.
    pub message: Cow<'static, str>,

    /// The offending input, unchanged.
    pub input: String,
}

impl ValidationIssue {
    /// Creates an issue from a rule name, message and offending input.
    pub fn new(
        rule: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            input: input.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (input: {:?})", self.rule, self.message, self.input)
    }
}

// ============================================================================
// ISSUE COLLECTION
// ============================================================================

/// Ordered list of issues carried by a rejected result.
///
/// Serializes as a plain JSON array so the pipeline sees `issues: [...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", DisplayIssues(.issues))]
pub struct ValidationIssues {
    issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if there are no issues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the first issue, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationIssue> {
        self.issues.first()
    }

    /// Iterates over the issues in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.issues.iter()
    }

    /// Returns all issues as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

impl From<ValidationIssue> for ValidationIssues {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl Extend<ValidationIssue> for ValidationIssues {
    fn extend<I: IntoIterator<Item = ValidationIssue>>(&mut self, iter: I) {
        self.issues.extend(iter);
    }
}

impl FromIterator<ValidationIssue> for ValidationIssues {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationIssues {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationIssues {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl std::ops::Index<usize> for ValidationIssues {
    type Output = ValidationIssue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.issues[index]
    }
}

struct DisplayIssues<'a>(&'a [ValidationIssue]);

impl fmt::Display for DisplayIssues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [single] => write!(f, "{single}"),
            issues => {
                write!(f, "Validation failed with {} issue(s):", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "\n  {}. {}", i + 1, issue)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
