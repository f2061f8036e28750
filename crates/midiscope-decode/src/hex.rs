//! Hex rendering and parsing helpers shared by the decoder and the key engine.

use crate::error::{Error, Result};

/// Two-digit uppercase hex, space separated: `90 3C 7F`.
pub fn format_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02X}"));
    }
    out
}

/// Two-digit uppercase hex with a `0x` prefix per byte: `0x90 0x3C`.
pub fn format_bytes_prefixed(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse one pattern token (`3C`, `3c`, `0x3C`) into a byte.
pub fn parse_hex_byte(token: &str) -> Result<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexToken(token.to_string()));
    }
    u8::from_str_radix(digits, 16).map_err(|_| Error::InvalidHexToken(token.to_string()))
}
