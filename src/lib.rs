//! Errors-as-values with explicit boundaries.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_boundary::*` or pick focused pieces as needed.
//!
//! The crate is built around four moves:
//!
//! 1. **Normalize** any raised value into a [`Failure`] ([`normalize`](normalize::normalize)).
//! 2. **Bound** an operation so panics and errors come back as an [`Outcome`]
//!    ([`boundary`], [`boundary_list`], and their async forms).
//! 3. **Aggregate** a sequence of outcomes into all values or one combined
//!    failure ([`aggregate`]).
//! 4. **Require** a value or an error where raising is wanted again
//!    ([`require_value`], [`require_error`]).
//!
//! # Examples
//!
//! ## Catching a Panic
//!
//! ```
//! use error_boundary::{boundary, Failure};
//!
//! let outcome = boundary(|| -> Result<u32, Failure> { panic!("hello world") });
//! assert_eq!(outcome.unwrap_err().message(), "hello world");
//! ```
//!
//! ## Aggregating Outcomes
//!
//! ```
//! use error_boundary::{boundary_list, Failure};
//!
//! let result = boundary_list(|| {
//!     [3_i32, 2, 1, -1, -2].map(|n| {
//!         if n < 0 {
//!             Err(Failure::new(format!("{} is not >= 0", n)))
//!         } else {
//!             Ok(2_u32.pow(n as u32))
//!         }
//!     })
//! });
//!
//! assert_eq!(
//!     result.unwrap_err().message(),
//!     "Caught 2 errors: [-1 is not >= 0, -2 is not >= 0]"
//! );
//! ```
//!
//! ## Leaving Errors-as-Values
//!
//! ```
//! use error_boundary::{require_error, require_value, Failure};
//!
//! assert_eq!(require_value(Ok::<_, Failure>(7)), 7);
//! let failure = require_error(Err::<u32, _>(Failure::new("expected")));
//! assert_eq!(failure.message(), "expected");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Boundary and conversion macros
pub mod macros;
/// Aggregation of outcome sequences
pub mod aggregate;
/// Normalization of raised values
pub mod normalize;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for converting into and leaving `Failure` values
pub mod traits;
/// `Failure`, `Outcome`, and formatting configuration
pub mod types;

/// Synchronous boundaries (requires `std` feature)
#[cfg(feature = "std")]
pub mod boundary;
/// Exit converters that raise again (requires `std` feature)
#[cfg(feature = "std")]
pub mod require;

/// Async extensions for boundaries and exit converters (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// JSON export of failures (requires `serde` feature)
#[cfg(feature = "serde")]
pub mod serialize;

pub use aggregate::{aggregate, aggregate_with};
pub use normalize::normalize;
pub use traits::*;
pub use types::{ErrorVec, Failure, Outcome, SummaryFormat};

#[cfg(feature = "std")]
pub use boundary::{boundary, boundary_list, try_boundary_list};
#[cfg(feature = "std")]
pub use require::{raise, require_error, require_error_with, require_value, EXPECTED_ERROR_MESSAGE};
