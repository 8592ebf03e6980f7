//! Synchronous boundaries.
//!
//! A boundary runs an operation and always returns an [`Outcome`]: panics
//! raised inside the operation are caught and normalized, returned errors are
//! converted with [`IntoFailure`]. Nothing escapes a boundary call.
//!
//! # Examples
//!
//! ```
//! use error_boundary::{boundary, boundary_list, Failure};
//!
//! let value = boundary(|| Ok::<_, Failure>("value"));
//! assert_eq!(value, Ok("value"));
//!
//! let caught = boundary(|| -> Result<(), Failure> { panic!("hello world") });
//! assert_eq!(caught.unwrap_err().message(), "hello world");
//!
//! let list = boundary_list(|| vec![Ok("a"), Err(Failure::new("Fail A")), Ok("b")]);
//! assert_eq!(list.unwrap_err().message(), "Caught 1 error: [Fail A]");
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::aggregate::aggregate;
use crate::macros::log_debug;
use crate::normalize::normalize;
use crate::traits::IntoFailure;
use crate::types::{Failure, Outcome};

/// Runs `operation`, turning both panics and returned errors into a [`Failure`].
///
/// A returned `Err` that already is a `Failure` comes back unchanged.
///
/// The process-wide panic hook still runs before the panic is caught, so the
/// default hook prints its report to stderr. Install a custom hook with
/// [`std::panic::set_hook`] for quiet boundaries.
///
/// # Examples
///
/// ```
/// use error_boundary::{boundary, Failure};
///
/// std::panic::set_hook(Box::new(|_| {}));
/// let outcome = boundary(|| -> Result<(), Failure> { panic!("quiet") });
/// let _ = std::panic::take_hook();
///
/// assert_eq!(outcome.unwrap_err().message(), "quiet");
/// ```
pub fn boundary<T, E, F>(operation: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: IntoFailure,
{
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(result) => result.map_err(IntoFailure::into_failure),
        Err(payload) => Err(caught(payload)),
    }
}

/// Runs `operation` to obtain a sequence of outcomes and aggregates it.
///
/// A panic while producing or iterating the sequence is a boundary-level
/// failure: it is normalized and returned as is, not wrapped in an aggregate.
pub fn boundary_list<T, E, I, F>(operation: F) -> Outcome<Vec<T>>
where
    F: FnOnce() -> I,
    I: IntoIterator<Item = Result<T, E>>,
    E: IntoFailure,
{
    match panic::catch_unwind(AssertUnwindSafe(|| aggregate(operation()))) {
        Ok(aggregated) => aggregated,
        Err(payload) => Err(caught(payload)),
    }
}

/// Like [`boundary_list`] for operations that can fail before producing a
/// sequence.
///
/// A returned `Err` is a boundary-level failure and is returned on its own.
///
/// # Examples
///
/// ```
/// use error_boundary::{try_boundary_list, Failure};
///
/// let refused = try_boundary_list(|| Err::<Vec<Result<u8, Failure>>, _>("connection refused"));
/// let failure = refused.unwrap_err();
/// assert_eq!(failure.message(), "connection refused");
/// assert!(!failure.is_aggregate());
/// ```
pub fn try_boundary_list<T, E, I, R, F>(operation: F) -> Outcome<Vec<T>>
where
    F: FnOnce() -> Result<I, R>,
    I: IntoIterator<Item = Result<T, E>>,
    E: IntoFailure,
    R: IntoFailure,
{
    match panic::catch_unwind(AssertUnwindSafe(|| operation().map(aggregate))) {
        Ok(Ok(aggregated)) => aggregated,
        Ok(Err(error)) => Err(error.into_failure()),
        Err(payload) => Err(caught(payload)),
    }
}

/// Normalizes a caught panic payload.
pub(crate) fn caught(payload: Box<dyn Any + Send>) -> Failure {
    let failure = normalize(payload);
    log_debug!(failure = %failure, "boundary caught a panic");
    failure
}
