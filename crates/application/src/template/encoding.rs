//! Per-placeholder value encoding
//!
//! The `encoding` attribute of a placeholder controls how its substituted
//! value is escaped. Every other attribute is informational to upstream
//! callers and has no effect here.

use std::collections::HashMap;

/// Encodes a substitution value according to the placeholder's attributes.
///
/// - no `encoding` attribute: UTF-8 percent-encoding, uppercase hex;
/// - `encoding: iso-8859-1`: the value is transcoded to Latin-1 bytes
///   first, then percent-encoded;
/// - `encoding: none`: the value is passed through unmodified.
#[must_use]
pub fn process_attribute_encoding(attributes: &HashMap<String, String>, value: &str) -> String {
    match attributes.get("encoding").map(String::as_str) {
        Some("none") => value.to_string(),
        Some("iso-8859-1") => urlencoding::encode_binary(&to_latin1_bytes(value)).into_owned(),
        _ => urlencoding::encode(value).into_owned(),
    }
}

/// Transcodes to Latin-1. Characters above U+00FF cannot be represented and
/// degrade to their UTF-8 bytes so that expansion still completes.
fn to_latin1_bytes(value: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(value.len());
    for c in value.chars() {
        match u8::try_from(u32::from(c)) {
            Ok(byte) => bytes.push(byte),
            Err(_) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    bytes
}
