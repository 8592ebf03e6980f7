//! Aggregation of outcome sequences.
//!
//! [`aggregate`] reduces a sequence of `Result<T, E>` entries to either every
//! success value, in input order, or one combined [`Failure`] that lists every
//! failing entry. The result is never a mix of both.
//!
//! # Examples
//!
//! ```
//! use error_boundary::aggregate;
//! use error_boundary::Failure;
//!
//! let all_ok = aggregate(vec![Ok::<_, Failure>("a"), Ok("b")]);
//! assert_eq!(all_ok, Ok(vec!["a", "b"]));
//!
//! let mixed = aggregate(vec![Ok("a"), Err(Failure::new("Fail A")), Ok("b"), Ok("c")]);
//! assert_eq!(mixed.unwrap_err().message(), "Caught 1 error: [Fail A]");
//! ```

use crate::macros::log_debug;
use crate::traits::IntoFailure;
use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, Failure, Outcome, SummaryFormat};

/// Collapses `outcomes` into all values or one combined failure.
///
/// The combined message is `Caught <N> <error|errors>: [<msg1>, <msg2>, ...]`
/// and the combined failure's causes are the failing entries, in input order.
/// An empty sequence yields `Ok(vec![])`.
pub fn aggregate<T, E, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: IntoFailure,
{
    aggregate_with(outcomes, &SummaryFormat::default())
}

/// Same as [`aggregate`], rendering the combined message with `format`.
///
/// # Examples
///
/// ```
/// use error_boundary::{aggregate_with, Failure, SummaryFormat};
///
/// let format = SummaryFormat::tagged("E_MULTI");
/// let result = aggregate_with(vec![Ok(1), Err(Failure::new("bad input"))], &format);
/// assert_eq!(result.unwrap_err().message(), "E_MULTI: Caught 1 error: [bad input]");
/// ```
pub fn aggregate_with<T, E, I>(outcomes: I, format: &SummaryFormat) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: IntoFailure,
{
    let iter = outcomes.into_iter();
    // Only the lower bound is reliable: `take_while` over a long range reports
    // an upper bound far above what it yields.
    let (lower, _) = iter.size_hint();

    let mut values = Vec::with_capacity(lower);
    let mut failures: ErrorVec<Failure> = ErrorVec::new();

    for outcome in iter {
        match outcome {
            Ok(value) => {
                if failures.is_empty() {
                    values.push(value);
                }
            },
            Err(error) => failures.push(error.into_failure()),
        }
    }

    if failures.is_empty() {
        return Ok(values);
    }

    log_debug!(failures = failures.len(), "collapsed outcome sequence into a combined failure");
    Err(Failure::aggregate_with(failures, format))
}
