//! Normalization of raised values into a [`Failure`].
//!
//! A raised value is anything a panic can carry: a `Box<dyn Any + Send>`.
//! [`normalize`] turns that payload into a [`Failure`] without ever panicking
//! itself, and hands back a payload that already is a `Failure` untouched.
//!
//! # Examples
//!
//! ```
//! use error_boundary::normalize::{normalize, UNKNOWN_VALUE_MESSAGE};
//! use error_boundary::Failure;
//!
//! let from_text = normalize(Box::new("plain text"));
//! assert_eq!(from_text.message(), "plain text");
//!
//! let opaque = normalize(Box::new(42_u8));
//! assert_eq!(opaque.message(), UNKNOWN_VALUE_MESSAGE);
//!
//! let original = Failure::new("kept as is");
//! let again = normalize(Box::new(original.clone()));
//! assert!(Failure::ptr_eq(&original, &again));
//! ```

use core::any::Any;
use core::fmt::{self, Debug, Write};

use crate::types::alloc_type::{Box, String};
use crate::types::Failure;

/// Message used when a raised value cannot be described.
pub const UNKNOWN_VALUE_MESSAGE: &str = "Unexpected error with unknown value.";

/// Prefix of messages produced by describing an arbitrary value.
pub const UNEXPECTED_VALUE_PREFIX: &str = "Unexpected error with value: ";

/// Converts a raised value into a [`Failure`].
///
/// Recognized payloads, checked in order:
///
/// 1. `Failure` - returned unchanged
/// 2. `String` / `&'static str` - the text becomes the message
/// 3. `Box<dyn Error + Send + Sync>` - its `Display` text becomes the message
/// 4. `serde_json::Value` (with the `serde` feature) - described as JSON
///
/// Anything else yields [`UNKNOWN_VALUE_MESSAGE`].
pub fn normalize(payload: Box<dyn Any + Send>) -> Failure {
    let payload = match payload.downcast::<Failure>() {
        Ok(failure) => return *failure,
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<String>() {
        Ok(message) => return Failure::new(*message),
        Err(payload) => payload,
    };

    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return Failure::new(*message);
    }

    #[cfg(feature = "std")]
    let payload = match payload.downcast::<Box<dyn std::error::Error + Send + Sync>>() {
        Ok(error) => return Failure::new(error.to_string()),
        Err(payload) => payload,
    };

    #[cfg(feature = "serde")]
    if let Some(value) = payload.downcast_ref::<serde_json::Value>() {
        return Failure::new(json_message(value));
    }

    #[cfg(not(feature = "serde"))]
    let _ = payload;

    Failure::new(UNKNOWN_VALUE_MESSAGE)
}

#[cfg(feature = "serde")]
fn json_message(value: &serde_json::Value) -> String {
    let mut message = String::from(UNEXPECTED_VALUE_PREFIX);
    let _ = write!(message, "{}", value);
    message
}

/// Describes an arbitrary value through its `Debug` output.
///
/// Falls back to [`UNKNOWN_VALUE_MESSAGE`] when formatting fails or panics.
///
/// # Examples
///
/// ```
/// use error_boundary::normalize::describe_debug;
///
/// let failure = describe_debug(&vec![1, 2]);
/// assert_eq!(failure.message(), "Unexpected error with value: [1, 2]");
/// ```
pub fn describe_debug<T: Debug + ?Sized>(value: &T) -> Failure {
    describe_with(|out| write!(out, "{:?}", value))
}

/// Describes an arbitrary value as JSON.
///
/// Falls back to [`UNKNOWN_VALUE_MESSAGE`] when the value cannot be serialized,
/// for example a map with non-string keys.
///
/// # Examples
///
/// ```
/// use error_boundary::normalize::describe_serialize;
///
/// let failure = describe_serialize(&serde_json::json!({ "code": 7 }));
/// assert_eq!(failure.message(), "Unexpected error with value: {\"code\":7}");
/// ```
#[cfg(feature = "serde")]
pub fn describe_serialize<T: serde::Serialize + ?Sized>(value: &T) -> Failure {
    describe_with(|out| {
        let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
        out.push_str(&json);
        Ok(())
    })
}

fn describe_with<F>(render: F) -> Failure
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut message = String::from(UNEXPECTED_VALUE_PREFIX);
    match guarded(|| render(&mut message)) {
        Some(Ok(())) => Failure::new(message),
        _ => Failure::new(UNKNOWN_VALUE_MESSAGE),
    }
}

#[cfg(feature = "std")]
fn guarded<R, F: FnOnce() -> R>(f: F) -> Option<R> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).ok()
}

#[cfg(not(feature = "std"))]
fn guarded<R, F: FnOnce() -> R>(f: F) -> Option<R> {
    Some(f())
}
