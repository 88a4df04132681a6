//! Base64 encoding helpers for MIME bodies and raw-send envelopes.

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Maximum line length for base64 bodies (RFC 2045).
pub const MAX_LINE_LENGTH: usize = 76;

/// Encodes data as Base64.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes Base64 data.
///
/// Whitespace is ignored so wrapped bodies decode directly.
///
/// # Errors
///
/// Returns an error if the input is not valid Base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    let cleaned: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(cleaned).map_err(Into::into)
}

/// Encodes data as Base64 wrapped at [`MAX_LINE_LENGTH`] columns.
///
/// Every line, including the last, ends with `\n`. Empty input yields a
/// single `\n`, matching what existing receivers of these documents expect.
#[must_use]
pub fn encode_base64_wrapped(data: &[u8]) -> String {
    let encoded = encode_base64(data);
    if encoded.is_empty() {
        return "\n".to_string();
    }

    let mut result = String::with_capacity(encoded.len() + encoded.len() / MAX_LINE_LENGTH + 1);
    // Base64 output is ASCII, so every byte offset is a char boundary.
    let mut rest = encoded.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(MAX_LINE_LENGTH));
        result.push_str(line);
        result.push('\n');
        rest = tail;
    }
    result
}
