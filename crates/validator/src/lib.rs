//! # pipecheck-validator
//!
//! Validation steps for composable pipelines. Each validator is configured
//! once, applied to many inputs, and reports its outcome as data.
//!
//! ## Quick Start
//!
//! ```
//! use pipecheck_validator::prelude::*;
//!
//! let id = uuid();
//! let input = "123e4567-e89b-12d3-a456-426614174000";
//! assert_eq!(id.validate(input), PipeResult::accept(input));
//!
//! let rejected = id.validate("not-a-uuid");
//! assert_eq!(rejected.issues()[0].rule, "uuid");
//! ```
//!
//! ## Result Shape
//!
//! [`PipeResult`](foundation::PipeResult) serializes to `{"output": ...}` when
//! accepted and to `{"issues": [{"rule", "message", "input"}]}` when rejected.
//!
//! ## Built-in Validators
//!
//! - **Identifiers**: [`Uuid`](validators::Uuid)

pub mod foundation;
pub mod prelude;
pub mod validators;
