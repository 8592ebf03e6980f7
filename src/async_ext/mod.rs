//! Async extensions for error-boundary.
//!
//! This module provides the async counterparts of the sync boundaries and exit
//! converters. The only suspension points are the awaits on the wrapped
//! futures; nothing is spawned.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-boundary = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_boundary::prelude_async::*;
//!
//! async fn fetch_all(ids: &[u64]) -> Outcome<Vec<User>> {
//!     boundary_list_async(|| join_all(ids.iter().map(|id| fetch_user(*id).boundary()))).await
//! }
//! ```

mod boundary;
mod boundary_future;
mod future_ext;
mod require;

pub use boundary::{boundary_async, boundary_list_async, try_boundary_list_async};
pub use boundary_future::{BoundaryFuture, CatchPanic};
pub use future_ext::FutureOutcomeExt;
pub use require::{require_error_async, require_error_async_with, require_value_async};
