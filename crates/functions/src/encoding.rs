//! Base64 and hexadecimal codecs over byte strings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use skiffsql_core::error::Result;
use skiffsql_core::types::ByteString;

const BASE64_LINE_WIDTH: usize = 76;

/// Standard base64 with MIME-style line wrapping: 76-character lines
/// joined with `\n`.
pub fn to_base64(bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    if encoded.len() <= BASE64_LINE_WIDTH {
        return encoded;
    }
    let mut out = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_WIDTH);
    for (i, chunk) in encoded.as_bytes().chunks(BASE64_LINE_WIDTH).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(std::str::from_utf8(chunk).expect("base64 output is ASCII"));
    }
    out
}

/// Decodes base64 text, ignoring interior whitespace; invalid input
/// yields `None` (SQL NULL at the caller).
pub fn from_base64(s: &str) -> Option<ByteString> {
    ByteString::from_base64(s).ok()
}

pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn from_hex(s: &str) -> Result<ByteString> {
    ByteString::from_hex(s.trim())
}
