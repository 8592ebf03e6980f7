//! Extension traits for results and iterators of results.
//!
//! [`OutcomeExt`] gives any `Result<T, E>` with `E: IntoFailure` method forms
//! of the exit converters, and [`OutcomeIterExt`] gives iterators of results a
//! method form of [`aggregate`](crate::aggregate).
//!
//! # Examples
//!
//! ```
//! use error_boundary::traits::{OutcomeExt, OutcomeIterExt};
//!
//! let parsed = ["1", "2", "x"].into_iter().map(|s| s.parse::<i32>().map_err(|e| e.to_string()));
//! let failure = parsed.aggregate().require_error();
//! assert_eq!(failure.message(), "Caught 1 error: [invalid digit found in string]");
//! ```

use crate::aggregate::{aggregate, aggregate_with};
use crate::traits::IntoFailure;
use crate::types::alloc_type::Vec;
use crate::types::{Outcome, SummaryFormat};
#[cfg(feature = "std")]
use crate::types::{alloc_type::String, Failure};

/// Extension trait turning a `Result<T, E>` into an [`Outcome`] or leaving
/// errors-as-values at a chosen point.
pub trait OutcomeExt<T, E: IntoFailure>: Sized {
    /// Converts the error side into a [`Failure`].
    ///
    /// # Examples
    ///
    /// ```
    /// use error_boundary::traits::OutcomeExt;
    ///
    /// let outcome = Err::<(), _>("not found").into_outcome();
    /// assert_eq!(outcome.unwrap_err().message(), "not found");
    /// ```
    fn into_outcome(self) -> Outcome<T>;

    /// Returns the value, or raises the failure.
    ///
    /// See [`require_value`](crate::require_value).
    ///
    /// # Panics
    ///
    /// Panics with the [`Failure`] as payload when `self` is an error.
    #[cfg(feature = "std")]
    #[track_caller]
    fn require_value(self) -> T {
        crate::require::require_value(self.into_outcome())
    }

    /// Returns the failure, or raises when `self` holds a value.
    ///
    /// See [`require_error`](crate::require_error).
    ///
    /// # Panics
    ///
    /// Panics with a [`Failure`] carrying `"Expected value to be an error."`
    /// when `self` is a value.
    #[cfg(feature = "std")]
    #[track_caller]
    fn require_error(self) -> Failure {
        crate::require::require_error(self.into_outcome())
    }

    /// Same as [`require_error`](OutcomeExt::require_error) with a custom message.
    ///
    /// # Panics
    ///
    /// Panics with a [`Failure`] carrying `message` when `self` is a value.
    #[cfg(feature = "std")]
    #[track_caller]
    fn require_error_with<M: Into<String>>(self, message: M) -> Failure {
        crate::require::require_error_with(self.into_outcome(), message)
    }
}

impl<T, E: IntoFailure> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self.map_err(IntoFailure::into_failure)
    }
}

/// Method form of [`aggregate`](crate::aggregate) for iterators of results.
///
/// # Examples
///
/// ```
/// use error_boundary::traits::OutcomeIterExt;
/// use error_boundary::Failure;
///
/// let squares = [1, 2, 3].into_iter().map(|n| Ok::<_, Failure>(n * n)).aggregate();
/// assert_eq!(squares, Ok(vec![1, 4, 9]));
/// ```
pub trait OutcomeIterExt<T, E: IntoFailure>: Iterator<Item = Result<T, E>> + Sized {
    /// Collapses the iterator with the default summary format.
    fn aggregate(self) -> Outcome<Vec<T>> {
        aggregate(self)
    }

    /// Collapses the iterator with a custom summary format.
    fn aggregate_with(self, format: &SummaryFormat) -> Outcome<Vec<T>> {
        aggregate_with(self, format)
    }
}

impl<I, T, E> OutcomeIterExt<T, E> for I
where
    I: Iterator<Item = Result<T, E>>,
    E: IntoFailure,
{
}
