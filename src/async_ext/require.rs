//! Asynchronous exit converters.
//!
//! Each converter awaits the future inside a [`BoundaryFuture`], so a panic
//! while polling is normalized before the usual sync rule applies.

use core::future::Future;

use crate::require::{require_error_with, require_value, EXPECTED_ERROR_MESSAGE};
use crate::traits::IntoFailure;
use crate::types::Failure;

use super::boundary_future::BoundaryFuture;

/// Awaits `future`, then applies [`require_value`].
///
/// # Panics
///
/// Panics with a [`Failure`] payload when the future resolves to an error or
/// panics while being polled.
pub async fn require_value_async<T, E, Fut>(future: Fut) -> T
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
    require_value(BoundaryFuture::new(future).await)
}

/// Awaits `future`, then applies [`require_error`](crate::require_error).
///
/// A panic while polling counts as finding an error and is returned normalized.
///
/// # Panics
///
/// Panics with a [`Failure`] carrying [`EXPECTED_ERROR_MESSAGE`] when the
/// future resolves to a value.
pub async fn require_error_async<T, E, Fut>(future: Fut) -> Failure
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
    require_error_async_with(future, EXPECTED_ERROR_MESSAGE).await
}

/// Same as [`require_error_async`], raising `message` when the future resolves
/// to a value.
///
/// # Panics
///
/// Panics with a [`Failure`] carrying `message` when the future resolves to a
/// value.
pub async fn require_error_async_with<T, E, Fut, M>(future: Fut, message: M) -> Failure
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
    M: Into<String>,
{
    require_error_with(BoundaryFuture::new(future).await, message)
}
