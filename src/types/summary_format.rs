//! Formatting of combined failure messages.

use core::fmt::Write;

use crate::types::alloc_type::String;
use crate::types::Failure;

/// Configuration for the message of a combined failure.
///
/// The default renders `Caught <N> <error|errors>: [<msg1>, <msg2>, ...]`.
///
/// # Examples
///
/// ```
/// use error_boundary::{Failure, SummaryFormat};
///
/// let causes = [Failure::new("Fail A"), Failure::new("Fail B")];
///
/// let plain = SummaryFormat::default().summarize(&causes);
/// assert_eq!(plain, "Caught 2 errors: [Fail A, Fail B]");
///
/// let tagged = SummaryFormat::tagged("E_MULTI").summarize(&causes);
/// assert_eq!(tagged, "E_MULTI: Caught 2 errors: [Fail A, Fail B]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFormat {
    pub prefix: Option<String>,
    pub separator: String,
    pub indent: String,
}

impl Default for SummaryFormat {
    fn default() -> Self {
        Self { prefix: None, separator: ", ".into(), indent: "  ".into() }
    }
}

impl SummaryFormat {
    /// Prepends `<code>: ` to every combined message.
    #[inline]
    pub fn tagged<S: Into<String>>(code: S) -> Self {
        Self { prefix: Some(code.into()), ..Default::default() }
    }

    /// Replaces the separator placed between individual messages.
    #[inline]
    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builds the combined message for `failures`, preserving their order.
    #[must_use]
    pub fn summarize(&self, failures: &[Failure]) -> String {
        let count = failures.len();
        let noun = if count == 1 { "error" } else { "errors" };

        let mut result = String::with_capacity(24 + count * 16);
        if let Some(prefix) = &self.prefix {
            result.push_str(prefix);
            result.push_str(": ");
        }
        let _ = write!(result, "Caught {} {}: [", count, noun);

        for (i, failure) in failures.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }
            result.push_str(failure.message());
        }

        result.push(']');
        result
    }

    /// Renders `failure` and its causes, one per line, children indented.
    #[must_use]
    pub fn render_tree(&self, failure: &Failure) -> String {
        let mut result = String::new();
        self.push_branch(&mut result, failure, 0);
        result
    }

    fn push_branch(&self, out: &mut String, failure: &Failure, depth: usize) {
        if depth > 0 {
            out.push('\n');
            for _ in 0..depth {
                out.push_str(&self.indent);
            }
        }
        out.push_str(failure.message());

        for cause in failure.causes() {
            self.push_branch(out, cause, depth + 1);
        }
    }
}
