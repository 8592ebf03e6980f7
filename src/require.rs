//! Exit converters: the points where errors-as-values become panics again.
//!
//! Raising uses [`std::panic::panic_any`] with the [`Failure`] itself as the
//! payload. A boundary further up that catches the panic gets back the very
//! same failure (see [`Failure::ptr_eq`]).
//!
//! # Examples
//!
//! ```
//! use error_boundary::{boundary, require_value, Failure};
//!
//! let original = Failure::new("fail");
//! let raised = original.clone();
//!
//! let caught = boundary(move || Ok::<(), Failure>(require_value(Err::<(), _>(raised))));
//! assert!(Failure::ptr_eq(&caught.unwrap_err(), &original));
//! ```

use crate::traits::IntoFailure;
use crate::types::Failure;

/// Default message raised by [`require_error`] when it finds a value.
pub const EXPECTED_ERROR_MESSAGE: &str = "Expected value to be an error.";

/// Returns the value, or raises the failure unchanged.
///
/// # Panics
///
/// Panics with the converted [`Failure`] as payload when `input` is an error.
#[track_caller]
pub fn require_value<T, E>(input: Result<T, E>) -> T
where
    E: IntoFailure,
{
    match input {
        Ok(value) => value,
        Err(error) => raise(error.into_failure()),
    }
}

/// Returns the failure, or raises a new one when `input` is a value.
///
/// # Panics
///
/// Panics with a [`Failure`] carrying [`EXPECTED_ERROR_MESSAGE`] when `input`
/// is a value.
#[track_caller]
pub fn require_error<T, E>(input: Result<T, E>) -> Failure
where
    E: IntoFailure,
{
    require_error_with(input, EXPECTED_ERROR_MESSAGE)
}

/// Same as [`require_error`], raising `message` when `input` is a value.
///
/// # Panics
///
/// Panics with a [`Failure`] carrying `message` when `input` is a value.
#[track_caller]
pub fn require_error_with<T, E, M>(input: Result<T, E>, message: M) -> Failure
where
    E: IntoFailure,
    M: Into<String>,
{
    match input {
        Ok(_) => raise(Failure::new(message)),
        Err(error) => error.into_failure(),
    }
}

/// Raises `failure` as a panic whose payload is the failure itself.
///
/// The panic hook runs as for any other panic, even when a boundary catches
/// the failure again.
///
/// # Panics
///
/// Always.
#[track_caller]
pub fn raise(failure: Failure) -> ! {
    std::panic::panic_any(failure)
}
