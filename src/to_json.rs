//! The `ToJson` capability trait.

use serde::Serialize;

use crate::encoder::Encoder;
use crate::error::EncodingResult;

/// Capability for rendering a value as pretty-printed JSON text.
///
/// Any type that implements [`Serialize`] can adopt the capability with an
/// empty impl block; the derived operations are provided by default methods
/// that delegate to the process-wide shared [`Encoder`]. Adoption is opt-in
/// rather than blanket so that `ToJson` remains a meaningful bound for
/// collaborators that only want to accept adopting types.
///
/// # Example
///
/// ```
/// use json_dto::ToJson;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Champion {
///     name: String,
///     id: u32,
/// }
///
/// impl ToJson for Champion {}
///
/// let ahri = Champion { name: "Ahri".into(), id: 103 };
/// let json = ahri.to_json().unwrap();
/// assert!(json.contains("\"name\": \"Ahri\""));
/// ```
pub trait ToJson: Serialize {
    /// Renders this value as pretty-printed JSON text.
    ///
    /// Uses the shared encoder, so two calls against field-for-field-equal
    /// values return byte-identical text. Does not mutate the receiver and
    /// performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`](crate::EncodingError) when this value (or
    /// a nested field) contains something the encoder cannot represent.
    fn to_json(&self) -> EncodingResult<String> {
        Encoder::shared().encode(self)
    }

    /// Renders this value as JSON text using an injected encoder.
    ///
    /// Behaves like [`ToJson::to_json`] but against the given encoder
    /// instead of the shared one, so callers can choose a different indent.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ToJson::to_json`].
    fn to_json_with(&self, encoder: &Encoder) -> EncodingResult<String> {
        encoder.encode(self)
    }

    /// Encodes this value into a structural [`serde_json::Value`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`ToJson::to_json`].
    fn to_json_value(&self) -> EncodingResult<serde_json::Value> {
        Encoder::shared().encode_value(self)
    }
}
