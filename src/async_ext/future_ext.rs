//! Extension trait for futures.
//!
//! Provides `.catch_panic()` for every future and `.boundary()` for futures
//! resolving to `Result<T, E>`, mirroring the sync [`boundary`](crate::boundary).

use core::future::Future;

use super::boundary_future::{BoundaryFuture, CatchPanic};

/// Extension trait wrapping futures in a panic-catching boundary.
///
/// # Examples
///
/// ```rust
/// use error_boundary::prelude_async::*;
///
/// async fn load() -> Result<u32, &'static str> {
///     Err("not found")
/// }
///
/// async fn example() -> Outcome<u32> {
///     load().boundary().await
/// }
/// ```
pub trait FutureOutcomeExt: Future + Sized {
    /// Resolves to `Err(failure)` instead of propagating a panic from `poll`.
    fn catch_panic(self) -> CatchPanic<Self> {
        CatchPanic::new(self)
    }

    /// Resolves to an [`Outcome`](crate::Outcome), converting both panics and
    /// returned errors into a [`Failure`](crate::Failure).
    fn boundary(self) -> BoundaryFuture<Self> {
        BoundaryFuture::new(self)
    }
}

impl<Fut: Future> FutureOutcomeExt for Fut {}
