//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_boundary::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`boundary!`](crate::boundary!)
//! - **Types**: [`Failure`], [`Outcome`], [`SummaryFormat`]
//! - **Functions**: [`aggregate`], [`boundary`], [`boundary_list`], [`require_value`], [`require_error`]
//! - **Traits**: [`IntoFailure`], [`OutcomeExt`], [`OutcomeIterExt`]
//!
//! # Examples
//!
//! ```
//! use error_boundary::prelude::*;
//!
//! fn parse_all(inputs: &[&str]) -> Outcome<Vec<u16>> {
//!     boundary_list(|| inputs.iter().map(|s| s.parse::<u16>().map_err(|e| e.to_string())))
//! }
//!
//! assert_eq!(parse_all(&["1", "2"]), Ok(vec![1, 2]));
//! assert_eq!(
//!     parse_all(&["1", "x"]).unwrap_err().message(),
//!     "Caught 1 error: [invalid digit found in string]"
//! );
//! ```

// Core types
pub use crate::types::{Failure, Outcome, SummaryFormat};

// Aggregation
pub use crate::aggregate::aggregate;

// Traits
pub use crate::traits::{IntoFailure, OutcomeExt, OutcomeIterExt};

// Boundaries and exit converters
#[cfg(feature = "std")]
pub use crate::boundary;
#[cfg(feature = "std")]
pub use crate::boundary::{boundary_list, try_boundary_list};
#[cfg(feature = "std")]
pub use crate::require::{require_error, require_error_with, require_value};
