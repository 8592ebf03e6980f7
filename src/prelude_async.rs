//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async boundaries and exit converters.
//!
//! # Usage
//!
//! ```
//! use error_boundary::prelude_async::*;
//!
//! async fn fetch_config() -> Result<String, std::io::Error> {
//!     Ok("debug = true".to_string())
//! }
//!
//! async fn load() -> Outcome<String> {
//!     boundary_async(fetch_config).await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Types**: [`Failure`], [`Outcome`], [`SummaryFormat`]
//! - **Traits**: [`IntoFailure`], [`OutcomeExt`], [`OutcomeIterExt`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt) - `.boundary()` and `.catch_panic()` for futures
//! - **Types**: [`BoundaryFuture`](crate::async_ext::BoundaryFuture), [`CatchPanic`](crate::async_ext::CatchPanic)
//! - **Functions**: [`boundary_async`], [`boundary_list_async`], [`require_value_async`], [`require_error_async`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{
    boundary_async, boundary_list_async, require_error_async, require_error_async_with,
    require_value_async, try_boundary_list_async, BoundaryFuture, CatchPanic, FutureOutcomeExt,
};
