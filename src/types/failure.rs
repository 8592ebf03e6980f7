//! The uniform error value.
//!
//! [`Failure`] carries a human-readable message and, when it summarizes several
//! failures, the ordered list of those failures as its causes. It is immutable
//! once created and cheap to clone: clones share the same allocation, so
//! identity survives any number of boundary layers (see [`Failure::ptr_eq`]).

use core::fmt;

use crate::types::alloc_type::{Arc, String};
use crate::types::{ErrorVec, SummaryFormat};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normalized error value produced by every boundary.
///
/// # Examples
///
/// ```
/// use error_boundary::Failure;
///
/// let failure = Failure::new("connection refused");
/// assert_eq!(failure.message(), "connection refused");
/// assert!(failure.causes().is_empty());
///
/// let copy = failure.clone();
/// assert!(Failure::ptr_eq(&failure, &copy));
/// ```
#[must_use]
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Failure {
    inner: Arc<FailureInner>,
}

#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct FailureInner {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    causes: ErrorVec<Failure>,
}

impl Failure {
    /// Creates a failure carrying only a message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::with_causes(message, ErrorVec::new())
    }

    /// Creates a failure with an explicit message and ordered causes.
    pub fn with_causes<S, I>(message: S, causes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Failure>,
    {
        Self {
            inner: Arc::new(FailureInner {
                message: message.into(),
                causes: causes.into_iter().collect(),
            }),
        }
    }

    /// Combines failures into one, using the default summary format.
    ///
    /// The causes are kept in the order given.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_boundary::Failure;
    ///
    /// let combined = Failure::aggregate([Failure::new("Fail A")]);
    /// assert_eq!(combined.message(), "Caught 1 error: [Fail A]");
    /// assert_eq!(combined.causes()[0].message(), "Fail A");
    /// ```
    pub fn aggregate<I>(causes: I) -> Self
    where
        I: IntoIterator<Item = Failure>,
    {
        Self::aggregate_with(causes, &SummaryFormat::default())
    }

    /// Combines failures into one, rendering the message with `format`.
    pub fn aggregate_with<I>(causes: I, format: &SummaryFormat) -> Self
    where
        I: IntoIterator<Item = Failure>,
    {
        let causes: ErrorVec<Failure> = causes.into_iter().collect();
        let message = format.summarize(&causes);
        Self::with_causes(message, causes)
    }

    /// Returns the human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Returns the causes in their original order.
    #[inline]
    pub fn causes(&self) -> &[Failure] {
        &self.inner.causes
    }

    /// Returns `true` if this failure summarizes other failures.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        !self.inner.causes.is_empty()
    }

    /// Returns `true` when both handles point at the same failure.
    ///
    /// Equality (`==`) compares contents; this compares identity.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Renders the failure and all nested causes as an indented tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_boundary::Failure;
    ///
    /// let combined = Failure::aggregate([Failure::new("a"), Failure::new("b")]);
    /// assert_eq!(combined.tree(), "Caught 2 errors: [a, b]\n  a\n  b");
    /// ```
    #[must_use]
    pub fn tree(&self) -> String {
        SummaryFormat::default().render_tree(self)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.inner == other.inner
    }
}

impl Eq for Failure {}

impl core::hash::Hash for Failure {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("message", &self.inner.message)
            .field("causes", &self.inner.causes)
            .finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .causes
            .first()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl From<String> for Failure {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Failure {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
