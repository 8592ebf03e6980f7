//! Conversion of failures into plain JSON values for logging or transport.
//!
//! Nothing else in the crate calls into this module; it exists for callers that
//! export the failures produced by the boundaries.
//!
//! # Feature Flag
//!
//! Requires the `serde` feature.
//!
//! # Examples
//!
//! ```
//! use error_boundary::serialize::{serialize, SerializeOptions};
//! use error_boundary::Failure;
//! use serde_json::json;
//!
//! let failure = Failure::aggregate([Failure::new("Fail A")]);
//! let value = serialize(&failure, &SerializeOptions::default());
//!
//! assert_eq!(
//!     value,
//!     json!({
//!         "message": "Caught 1 error: [Fail A]",
//!         "causes": [{ "message": "Fail A", "causes": [] }]
//!     })
//! );
//! ```

use serde_json::{Map, Value};

use crate::types::alloc_type::{String, Vec};
use crate::types::Failure;

/// Options for [`serialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Keys kept in the output but replaced by `null`, at every nesting level.
    pub keys_to_omit: Vec<String>,
}

impl SerializeOptions {
    /// Adds `key` to the omitted keys.
    #[must_use]
    pub fn omit<K: Into<String>>(mut self, key: K) -> Self {
        self.keys_to_omit.push(key.into());
        self
    }

    fn is_omitted(&self, key: &str) -> bool {
        self.keys_to_omit.iter().any(|omitted| omitted == key)
    }
}

/// Converts `failure` and its causes into an acyclic JSON value.
///
/// # Examples
///
/// ```
/// use error_boundary::serialize::{serialize, SerializeOptions};
/// use error_boundary::Failure;
///
/// let options = SerializeOptions::default().omit("message");
/// let value = serialize(&Failure::new("secret token expired"), &options);
/// assert!(value["message"].is_null());
/// ```
#[must_use]
pub fn serialize(failure: &Failure, options: &SerializeOptions) -> Value {
    let mut object = Map::with_capacity(2);

    let message = if options.is_omitted("message") {
        Value::Null
    } else {
        Value::String(failure.message().into())
    };
    object.insert("message".into(), message);

    let causes = if options.is_omitted("causes") {
        Value::Null
    } else {
        Value::Array(failure.causes().iter().map(|cause| serialize(cause, options)).collect())
    };
    object.insert("causes".into(), causes);

    Value::Object(object)
}
