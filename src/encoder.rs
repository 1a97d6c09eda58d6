//! The shared pretty-printing JSON encoder.

use std::sync::LazyLock;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::EncodingResult;

/// Default indentation: two spaces per nesting level.
const DEFAULT_INDENT: &str = "  ";

static SHARED: LazyLock<Encoder> = LazyLock::new(Encoder::new);

/// An immutable pretty-printing JSON encoder.
///
/// The encoder is configured once at construction and never mutated, so a
/// single instance can be used freely from multiple threads. Most callers
/// go through [`Encoder::shared`], which initializes one process-wide
/// instance on first use; tests and collaborators that need a different
/// indent can construct their own with [`Encoder::with_indent`].
///
/// # Example
///
/// ```
/// use json_dto::Encoder;
///
/// let json = Encoder::shared().encode(&vec![1, 2, 3]).unwrap();
/// assert_eq!(json, "[\n  1,\n  2,\n  3\n]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoder {
    /// Indent string repeated once per nesting level.
    indent: String,
}

impl Encoder {
    /// Creates an encoder with the default two-space indent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Creates an encoder with a custom indent string.
    #[must_use]
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Returns the process-wide shared encoder.
    ///
    /// Initialized lazily on first use with the default configuration and
    /// kept alive until process exit. All capability calls that do not
    /// inject their own encoder go through this instance.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the configured indent string.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Encodes a value as pretty-printed JSON text.
    ///
    /// Pure and synchronous: no I/O, no mutation of the value. Output is
    /// multi-line with one key-value pair per line, keys in the order the
    /// value's `Serialize` impl emits them (declaration order for derived
    /// structs).
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`](crate::EncodingError) when the value
    /// contains something the encoder cannot represent, such as a map with
    /// non-string keys or a `Serialize` impl that fails.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> EncodingResult<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Encodes a value into a structural [`serde_json::Value`].
    ///
    /// Useful when a caller wants to inspect or re-shape the encoded form
    /// rather than render text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`](crate::EncodingError) under the same
    /// conditions as [`Encoder::encode`].
    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> EncodingResult<serde_json::Value> {
        Ok(serde_json::to_value(value)?)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
