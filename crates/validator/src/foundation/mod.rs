//! Core validation types and traits
//!
//! This module contains the contract shared between validators and the
//! pipeline that runs them:
//!
//! - **Trait**: [`Validate`]
//! - **Result**: [`PipeResult`], accepted output or rejected issues
//! - **Issues**: [`ValidationIssue`], [`ValidationIssues`]
//! - **Messages**: [`ErrorMessage`], literal or computed from the input
//!
//! # Examples
//!
//! ```
//! use pipecheck_validator::foundation::{PipeResult, Validate};
//! use pipecheck_validator::validators::uuid;
//!
//! let validator = uuid();
//! match validator.validate("123e4567-e89b-12d3-a456-426614174000") {
//!     PipeResult::Accepted { output } => assert_eq!(output.len(), 36),
//!     PipeResult::Rejected { issues } => panic!("unexpected: {issues}"),
//! }
//! ```

pub mod issue;
pub mod message;
pub mod result;
pub mod traits;

pub use issue::{ValidationIssue, ValidationIssues};
pub use message::ErrorMessage;
pub use result::PipeResult;
pub use traits::Validate;

/// A validation result converted into a standard `Result`.
pub type ValidationResult<T> = Result<T, ValidationIssues>;

// ============================================================================
// TESTS
// ============================================================================
