//! Asynchronous boundaries.
//!
//! Each function takes a closure producing the future rather than the future
//! itself, so a panic raised while *creating* the future is caught as well as
//! one raised while polling it.

use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use crate::boundary::{boundary_list, caught};
use crate::traits::IntoFailure;
use crate::types::Outcome;

use super::boundary_future::{BoundaryFuture, CatchPanic};

/// Async counterpart of [`boundary`](crate::boundary).
///
/// # Examples
///
/// ```rust
/// use error_boundary::async_ext::boundary_async;
/// use error_boundary::Failure;
///
/// async fn example() {
///     let value = boundary_async(|| async { Ok::<_, Failure>("value") }).await;
///     assert_eq!(value, Ok("value"));
/// }
/// ```
pub async fn boundary_async<T, E, F, Fut>(operation: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
    let future = start(operation)?;
    BoundaryFuture::new(future).await
}

/// Async counterpart of [`boundary_list`](crate::boundary_list).
///
/// The resolved sequence keeps the order in which the caller built it, not the
/// order in which its entries completed.
///
/// # Examples
///
/// ```rust
/// use error_boundary::async_ext::boundary_list_async;
/// use error_boundary::Failure;
///
/// async fn example() {
///     let list = boundary_list_async(|| async {
///         vec![Ok("a"), Err(Failure::new("Fail A")), Ok("b"), Err(Failure::new("Fail B"))]
///     })
///     .await;
///     assert_eq!(list.unwrap_err().message(), "Caught 2 errors: [Fail A, Fail B]");
/// }
/// ```
pub async fn boundary_list_async<T, E, I, F, Fut>(operation: F) -> Outcome<Vec<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = I>,
    I: IntoIterator<Item = Result<T, E>>,
    E: IntoFailure,
{
    let future = start(operation)?;
    let outcomes = CatchPanic::new(future).await?;
    boundary_list(move || outcomes)
}

/// Async counterpart of [`try_boundary_list`](crate::try_boundary_list).
///
/// A future resolving to `Err` is a boundary-level failure, returned on its own.
pub async fn try_boundary_list_async<T, E, I, R, F, Fut>(operation: F) -> Outcome<Vec<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<I, R>>,
    I: IntoIterator<Item = Result<T, E>>,
    E: IntoFailure,
    R: IntoFailure,
{
    let future = start(operation)?;
    let outcomes = BoundaryFuture::new(future).await?;
    boundary_list(move || outcomes)
}

/// Calls `operation`, catching a panic raised before a future exists.
fn start<F, Fut>(operation: F) -> Outcome<Fut>
where
    F: FnOnce() -> Fut,
{
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(caught)
}
