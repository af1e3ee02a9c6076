//! RISON Encoder — converts JSON values into compact, URI-friendly RISON text.
//!
//! RISON mirrors JSON's data model with a syntax chosen to survive inside a
//! query string with little or no escaping:
//!
//! - **Literals**: `!n`, `!t`, `!f`
//! - **Objects**: `(key:value,key:value)`, keys sorted ascending
//! - **Arrays**: `!(v1,v2,v3)`
//! - **Strings**: bare when they read as an identifier, otherwise `'quoted'`
//! - **Numbers**: shortest decimal form, whole numbers without `.0`
//!
//! # Example
//! ```
//! use rison_core::encode;
//! use serde_json::json;
//!
//! let value = json!({"user": "alice", "tags": ["a b", 3], "active": true});
//! assert_eq!(encode(&value), "(active:!t,tags:!('a b',3),user:alice)");
//! ```

use crate::error::{Result, RisonError};
use crate::escape::url_encode;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Where [`url_encode`] is applied while encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UriEscape {
    /// Plain RISON text, no percent-encoding.
    #[default]
    None,
    /// Percent-encode the finished RISON text once. Structural characters
    /// survive because they are all in the RISON safe set.
    Document,
    /// Percent-encode the quoted body of every string leaf and object key,
    /// after `'` and `\` are escaped. Matches encoders that escape per
    /// field; percent-decoding the output yields the plain RISON text.
    Leaves,
}

/// Options for [`encode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub escape: UriEscape,
}

impl EncodeOptions {
    /// Options for text that goes straight into a URI query component.
    pub fn uri() -> Self {
        Self {
            escape: UriEscape::Document,
        }
    }
}

/// Encode a JSON value as RISON.
///
/// Total over `serde_json::Value`: non-finite numbers and non-string keys
/// cannot be represented by the input type, so there is no failure case.
pub fn encode(value: &Value) -> String {
    encode_with(value, &EncodeOptions::default())
}

/// Encode a JSON value as RISON and percent-encode the result for a URI.
pub fn encode_uri(value: &Value) -> String {
    encode_with(value, &EncodeOptions::uri())
}

/// Encode a JSON value as RISON using the given options.
pub fn encode_with(value: &Value, options: &EncodeOptions) -> String {
    let leaf = match options.escape {
        UriEscape::Leaves => Leaf::UriEscaped,
        UriEscape::None | UriEscape::Document => Leaf::Raw,
    };
    let mut out = String::new();
    encode_value(value, leaf, &mut out);
    match options.escape {
        UriEscape::Document => url_encode(&out),
        UriEscape::None | UriEscape::Leaves => out,
    }
}

/// Parse a JSON string and encode it as RISON.
///
/// Returns an error if the input is not valid JSON.
pub fn encode_json(json: &str) -> Result<String> {
    encode_json_with(json, &EncodeOptions::default())
}

/// Parse a JSON string and encode it as RISON using the given options.
pub fn encode_json_with(json: &str, options: &EncodeOptions) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(encode_with(&value, options))
}

/// Serialize any `Serialize` type to RISON by way of `serde_json::Value`.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value).map_err(RisonError::Serialize)?;
    Ok(encode(&value))
}

/// How string leaves and keys are treated before quoting.
#[derive(Clone, Copy, PartialEq)]
enum Leaf {
    Raw,
    UriEscaped,
}

fn encode_value(value: &Value, leaf: Leaf, out: &mut String) {
    match value {
        Value::Null => out.push_str("!n"),
        Value::Bool(true) => out.push_str("!t"),
        Value::Bool(false) => out.push_str("!f"),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => encode_string(s, leaf, out),
        Value::Array(items) => encode_array(items, leaf, out),
        Value::Object(map) => encode_object(map, leaf, out),
    }
}

/// `!(v1,v2)` in original order; `!()` when empty.
fn encode_array(items: &[Value], leaf: Leaf, out: &mut String) {
    out.push_str("!(");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_value(item, leaf, out);
    }
    out.push(')');
}

/// `(k1:v1,k2:v2)` with keys in ascending order; `()` when empty.
///
/// `serde_json::Map` iterates in insertion order under `preserve_order`, so
/// the entries are sorted here rather than relying on the map type.
fn encode_object(map: &Map<String, Value>, leaf: Leaf, out: &mut String) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    out.push('(');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_string(key, leaf, out);
        out.push(':');
        encode_value(value, leaf, out);
    }
    out.push(')');
}

/// Format a JSON number in its shortest positional decimal form:
/// - Integers as-is
/// - Whole floats as integer digits at any magnitude (1.0 → 1, 1e20 → 100000000000000000000)
/// - Fractions without an exponent (1e-7 → 0.0000001)
/// - Negative zero as 0
fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        // `Display` for f64 prints the shortest round-trip digits positionally
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Emit a string (value or key), bare when it is an identifier, otherwise
/// single-quoted with `'` and `\` backslash-escaped. In leaf mode the quoted
/// body is percent-encoded after the backslash escapes are applied, so the
/// receiver decodes it back to the plain quoted form.
fn encode_string(s: &str, leaf: Leaf, out: &mut String) {
    // Identifier characters are all in the URI safe set, so this holds in both modes.
    if is_bare_ident(s) {
        out.push_str(s);
        return;
    }
    let mut body = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\'' => body.push_str("\\'"),
            '\\' => body.push_str("\\\\"),
            _ => body.push(ch),
        }
    }
    out.push('\'');
    match leaf {
        Leaf::UriEscaped => out.push_str(&url_encode(&body)),
        Leaf::Raw => out.push_str(&body),
    }
    out.push('\'');
}

/// Words that would read as something other than a string when left bare.
const RESERVED_WORDS: [&str; 3] = ["true", "false", "null"];

/// Test if a string can be emitted unquoted: `^[A-Za-z_][A-Za-z0-9_-]*$` and
/// not a reserved word. The leading-character rule already excludes anything
/// that could be read back as a number.
fn is_bare_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !RESERVED_WORDS.contains(&s)
}
