//! Core trait for the validation system
//!
//! A validator is configured once and then applied to any number of inputs.
//! It never fails in the `Err` sense: every outcome is a [`PipeResult`].

use crate::foundation::PipeResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// The accepted output borrows from the input, so a passing value flows
/// through the pipeline without being copied.
///
/// The trait is object safe; heterogeneous validators over the same input
/// type can be stored as `&dyn Validate<Input = str>` or
/// `Box<dyn Validate<Input = str>>`.
///
/// # Examples
///
/// ```
/// use pipecheck_validator::foundation::{PipeResult, Validate};
///
/// struct NotEmpty;
///
/// impl Validate for NotEmpty {
///     type Input = str;
///
///     fn validate<'a>(&self, input: &'a str) -> PipeResult<&'a str> {
///         if input.is_empty() {
///             PipeResult::issue("not_empty", "Must not be empty", input)
///         } else {
///             PipeResult::accept(input)
///         }
///     }
/// }
///
/// assert!(NotEmpty.validate("x").is_accepted());
/// assert!(NotEmpty.validate("").is_rejected());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so validators can take `str` and `[T]` directly.
    type Input: ?Sized;

    /// Validates `input`, returning it unchanged on success.
    fn validate<'a>(&self, input: &'a Self::Input) -> PipeResult<&'a Self::Input>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate<'a>(&self, input: &'a Self::Input) -> PipeResult<&'a Self::Input> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate<'a>(&self, input: &'a Self::Input) -> PipeResult<&'a Self::Input> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
