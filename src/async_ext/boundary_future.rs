//! Future wrappers that keep panics from escaping a poll.
//!
//! [`CatchPanic`] catches a panic raised while polling any future and reports
//! it as a normalized [`Failure`]. [`BoundaryFuture`] builds on it for futures
//! resolving to `Result<T, E>`, so panics and returned errors share one shape.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::boundary::caught;
use crate::traits::IntoFailure;
use crate::types::Outcome;

pin_project! {
    /// A Future wrapper that turns a panic during `poll` into a [`Failure`](crate::Failure).
    ///
    /// # Cancel Safety
    ///
    /// `CatchPanic` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_boundary::async_ext::CatchPanic;
    ///
    /// async fn example() {
    ///     let outcome = CatchPanic::new(async { "ready" }).await;
    ///     assert_eq!(outcome, Ok("ready"));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchPanic<Fut> {
        #[pin]
        future: Fut,
        terminated: bool,
    }
}

impl<Fut> CatchPanic<Fut> {
    /// Wraps `future`.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, terminated: false }
    }
}

impl<Fut: Future> Future for CatchPanic<Fut> {
    type Output = Outcome<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        let output = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(output)) => Ok(output),
            Err(payload) => Err(caught(payload)),
        };

        *this.terminated = true;
        Poll::Ready(output)
    }
}

impl<Fut: Future> FusedFuture for CatchPanic<Fut> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

pin_project! {
    /// A Future wrapper that resolves to an [`Outcome`] instead of panicking.
    ///
    /// Panics while polling are normalized; a returned `Err(e)` is converted
    /// with [`IntoFailure`], which leaves an existing `Failure` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_boundary::async_ext::BoundaryFuture;
    ///
    /// async fn example() {
    ///     let outcome = BoundaryFuture::new(async { Err::<(), _>("refused") }).await;
    ///     assert_eq!(outcome.unwrap_err().message(), "refused");
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct BoundaryFuture<Fut> {
        #[pin]
        inner: CatchPanic<Fut>,
    }
}

impl<Fut> BoundaryFuture<Fut> {
    /// Wraps `future`.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { inner: CatchPanic::new(future) }
    }
}

impl<Fut, T, E> Future for BoundaryFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(|caught| match caught {
            Ok(result) => result.map_err(IntoFailure::into_failure),
            Err(failure) => Err(failure),
        })
    }
}

impl<Fut, T, E> FusedFuture for BoundaryFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
