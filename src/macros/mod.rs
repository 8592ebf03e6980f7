//! Macros for boundaries and failure conversions.
//!
//! - [`macro@crate::boundary`] - Runs an expression inside a [`boundary`](crate::boundary).
//! - [`macro@crate::impl_into_failure`] - Implements [`IntoFailure`](crate::traits::IntoFailure)
//!   for a type that implements `Display`.
//!
//! # Examples
//!
//! ```
//! use error_boundary::{boundary, Failure};
//!
//! let parsed = boundary!("42".parse::<u32>().map_err(|e| Failure::new(e.to_string())));
//! assert_eq!(parsed, Ok(42));
//! ```

/// Runs a `Result`-producing expression or block inside a
/// [`boundary`](crate::boundary).
///
/// # Syntax
///
/// - `boundary!(expr)` - Wraps a single `Result`-producing expression
/// - `boundary!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use error_boundary::{boundary, Failure};
///
/// let outcome = boundary!({
///     let items: Vec<u32> = Vec::new();
///     Ok::<_, Failure>(items[3])
/// });
/// assert!(outcome.unwrap_err().message().contains("index out of bounds"));
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! boundary {
    ($expr:expr $(,)?) => {
        $crate::boundary(|| $expr)
    };
}

/// Implements [`IntoFailure`](crate::traits::IntoFailure) for types implementing `Display`.
///
/// # Examples
///
/// ```
/// use error_boundary::{impl_into_failure, traits::IntoFailure};
/// use std::fmt;
///
/// struct QuotaError {
///     limit: u32,
/// }
///
/// impl fmt::Display for QuotaError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "quota of {} exceeded", self.limit)
///     }
/// }
///
/// impl_into_failure!(QuotaError);
///
/// let failure = QuotaError { limit: 10 }.into_failure();
/// assert_eq!(failure.message(), "quota of 10 exceeded");
/// ```
#[macro_export]
macro_rules! impl_into_failure {
    ($type:ty) => {
        impl $crate::traits::IntoFailure for $type {
            fn into_failure(self) -> $crate::Failure {
                $crate::Failure::new(self.to_string())
            }
        }
    };
}

/// Emits a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use log_debug;
