//! Trait for converting returned errors into a [`Failure`].
//!
//! Every boundary accepts operations returning `Result<T, E>` for any
//! `E: IntoFailure`, so callers can keep their own error types and still get
//! a uniform [`Failure`] out.
//!
//! # Implementations
//!
//! - `Failure` - Identity conversion (the same failure is returned)
//! - `String`, `&str`, `Cow<str>` - The text becomes the message
//! - `Box<dyn Error + Send + Sync>`, `std::io::Error` - The `Display` text becomes the message
//!
//! # Examples
//!
//! ```
//! use error_boundary::{traits::IntoFailure, Failure};
//!
//! let from_text = "disk full".into_failure();
//! assert_eq!(from_text.message(), "disk full");
//!
//! let original = Failure::new("already normalized");
//! let same = original.clone().into_failure();
//! assert!(Failure::ptr_eq(&original, &same));
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::Failure;

/// Converts a type into a [`Failure`].
///
/// # Implementing for Custom Types
///
/// 1. Use the [`impl_into_failure!`](crate::impl_into_failure) macro for types implementing `Display`:
///    ```ignore
///    impl_into_failure!(MyError);
///    ```
///
/// 2. Implement the trait manually:
///    ```
///    use error_boundary::{traits::IntoFailure, Failure};
///
///    struct HttpStatus(u16);
///
///    impl IntoFailure for HttpStatus {
///        fn into_failure(self) -> Failure {
///            Failure::new(format!("unexpected status {}", self.0))
///        }
///    }
///    ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a `Failure`",
    label = "this type does not implement `IntoFailure`",
    note = "implement `IntoFailure` manually or use `impl_into_failure!({Self})` macro"
)]
pub trait IntoFailure {
    /// Converts `self` into a [`Failure`].
    fn into_failure(self) -> Failure;
}

impl IntoFailure for Failure {
    /// Identity conversion; never re-wraps.
    #[inline]
    fn into_failure(self) -> Failure {
        self
    }
}

impl IntoFailure for String {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}

impl IntoFailure for &str {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self)
    }
}

impl IntoFailure for Cow<'_, str> {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self.into_owned())
    }
}

impl IntoFailure for core::fmt::Error {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new("an error occurred when formatting an argument")
    }
}

impl IntoFailure for core::convert::Infallible {
    fn into_failure(self) -> Failure {
        match self {}
    }
}

#[cfg(feature = "std")]
impl IntoFailure for std::boxed::Box<dyn std::error::Error + Send + Sync> {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self.to_string())
    }
}

#[cfg(feature = "std")]
impl IntoFailure for std::io::Error {
    #[inline]
    fn into_failure(self) -> Failure {
        Failure::new(self.to_string())
    }
}
