//! RISON-aware URI percent-encoding.
//!
//! RISON text is meant to ride inside a URI query component. A strict
//! `encodeURIComponent` would escape `(`, `)`, `!`, `:` and `,`, which RISON
//! uses on every value, and the result would often be *longer* than
//! URL-encoded JSON. The safe set used here keeps those characters literal:
//!
//! - ASCII letters and digits
//! - the unreserved marks `- _ . ~`
//! - `! * ' ( )`, which `encodeURIComponent` already leaves alone
//! - `, : @ $ /`, which are legal in a query component
//!
//! Everything else is encoded as UTF-8 bytes in `%XX` form with uppercase hex.
//! Space becomes `%20`, never `+`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that [`url_encode`] percent-encodes: everything outside the
/// RISON safe set. Non-ASCII input is always encoded.
pub const RISON_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b':')
    .remove(b'@')
    .remove(b'$')
    .remove(b'/');

/// Percent-encode a string for a URI query component using the RISON safe set.
///
/// Applied once to finished RISON text; already-escaped `%XX` sequences in the
/// input are escaped again (`%` is not in the safe set), so callers must not
/// feed the output back in.
///
/// # Example
/// ```
/// use rison_core::url_encode;
/// assert_eq!(url_encode("(q:'a b')"), "(q:'a%20b')");
/// assert_eq!(url_encode("café"), "caf%C3%A9");
/// ```
pub fn url_encode(input: &str) -> String {
    utf8_percent_encode(input, RISON_ENCODE_SET).to_string()
}

/// Whether `url_encode` leaves `c` untouched.
///
/// Classified by running `c` through [`RISON_ENCODE_SET`]: a safe character
/// comes back as the same single chunk, an unsafe one as `%XX`.
pub fn is_safe(c: char) -> bool {
    let mut buf = [0u8; 4];
    let s: &str = c.encode_utf8(&mut buf);
    utf8_percent_encode(s, RISON_ENCODE_SET).next() == Some(s)
}
