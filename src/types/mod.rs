//! Value types shared by every boundary.
//!
//! This module provides [`Failure`], the single normalized error representation,
//! the [`Outcome`] alias that carries it, and [`SummaryFormat`] which controls how
//! combined failures are rendered.
//!
//! # Examples
//!
//! ```
//! use error_boundary::{Failure, Outcome};
//!
//! let failure = Failure::aggregate([Failure::new("disk full"), Failure::new("timeout")]);
//! let outcome: Outcome<()> = Err(failure);
//!
//! let err = outcome.unwrap_err();
//! assert_eq!(err.message(), "Caught 2 errors: [disk full, timeout]");
//! assert_eq!(err.causes().len(), 2);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod failure;
pub mod summary_format;

pub use failure::*;
pub use summary_format::*;

/// SmallVec-backed collection used for the causes of a combined failure.
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case of a single failing entry.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Either a success value or a [`Failure`].
///
/// This is the return channel of every boundary in the crate.
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type Outcome<T> = Result<T, Failure>;
