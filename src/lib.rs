//! Shared pretty-printed JSON serialization for DTO types.
//!
//! This crate provides one capability: any `Serialize` type can adopt
//! [`ToJson`] and gain a `to_json()` method that renders the value as
//! pretty-printed JSON text through a single process-wide [`Encoder`].
//! The encoder is configured once (two-space indent), initialized lazily
//! on first use, and safe to call from multiple threads.
//!
//! # Example
//!
//! ```
//! use json_dto::ToJson;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Champion {
//!     name: String,
//!     id: u32,
//! }
//!
//! impl ToJson for Champion {}
//!
//! let ahri = Champion { name: "Ahri".into(), id: 103 };
//! println!("{}", ahri.to_json().unwrap());
//! ```

pub mod encoder;
pub mod error;
pub mod to_json;

pub use encoder::Encoder;
pub use error::{EncodingError, EncodingResult};
pub use to_json::ToJson;
