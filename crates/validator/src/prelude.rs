//! Prelude module for convenient imports.
//!
//! `use pipecheck_validator::prelude::*;` brings in the `Validate` trait, the
//! result and issue types, and every built-in validator.

pub use crate::foundation::{
    ErrorMessage, PipeResult, Validate, ValidationIssue, ValidationIssues, ValidationResult,
};

pub use crate::validators::{Uuid, UuidOptions, uuid, uuid_with_message};
