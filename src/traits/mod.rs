//! Core traits for moving between errors and [`Failure`](crate::Failure) values.
//!
//! - [`IntoFailure`]: Conversion of returned errors into a `Failure`
//! - [`OutcomeExt`]: Method forms of the exit converters on `Result`
//! - [`OutcomeIterExt`]: Method form of aggregation on iterators of `Result`
//!
//! # Examples
//!
//! ```
//! use error_boundary::traits::{IntoFailure, OutcomeIterExt};
//!
//! let failure = "quota exceeded".into_failure();
//! assert_eq!(failure.to_string(), "quota exceeded");
//!
//! let combined = vec![Ok(1), Err("a"), Err("b")].into_iter().aggregate();
//! assert_eq!(combined.unwrap_err().causes().len(), 2);
//! ```

pub mod into_failure;
pub mod outcome_ext;

pub use into_failure::IntoFailure;
pub use outcome_ext::{OutcomeExt, OutcomeIterExt};
