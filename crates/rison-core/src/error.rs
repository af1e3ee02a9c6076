//! Error types for the fallible RISON entry points.
//!
//! Encoding a `serde_json::Value` never fails. Errors only arise on the way
//! *into* the value domain: parsing JSON text or serializing a serde type.

use thiserror::Error;

/// Errors that can occur before a value reaches the encoder.
#[derive(Error, Debug)]
pub enum RisonError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A serde value could not be represented as a JSON value
    /// (e.g. a map whose keys do not serialize to strings).
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias used throughout rison-core.
pub type Result<T> = std::result::Result<T, RisonError>;
