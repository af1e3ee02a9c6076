//! # rison-core
//!
//! Pure-Rust encoder for **RISON**, a compact serialization of JSON values
//! designed to be embedded in URI query strings.
//!
//! RISON replaces JSON's braces, brackets and double quotes with characters
//! that are legal in a query component (`(`, `)`, `!`, `'`), drops quotes
//! around identifier-like strings, and sorts object keys so the same value
//! always produces the same text. Paired with a percent-encoder that leaves
//! those characters alone, the result is usually much shorter than
//! URL-encoded JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use rison_core::{encode, encode_uri, url_encode};
//! use serde_json::json;
//!
//! let value = json!({"q": "hello world!", "n": 5});
//! assert_eq!(encode(&value), "(n:5,q:'hello world!')");
//! assert_eq!(encode_uri(&value), "(n:5,q:'hello%20world!')");
//! assert_eq!(url_encode("a b"), "a%20b");
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — `serde_json::Value` → RISON string
//! - [`escape`] — RISON-aware URI percent-encoding
//! - [`error`] — Error types for JSON parse/serialize failures

pub mod encoder;
pub mod error;
pub mod escape;

pub use encoder::{
    encode, encode_json, encode_json_with, encode_uri, encode_with, to_string, EncodeOptions,
    UriEscape,
};
pub use error::RisonError;
pub use escape::{is_safe, url_encode};
