//! Built-in validators
//!
//! # Examples
//!
//! ```
//! use pipecheck_validator::prelude::*;
//!
//! let id = uuid_with_message("bad id");
//! assert!(id.validate("123e4567-e89b-12d3-a456-426614174000").is_accepted());
//! ```

// String format validators
pub mod uuid;

pub use uuid::{Uuid, UuidOptions, uuid, uuid_with_message};
