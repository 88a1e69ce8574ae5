//! Modified UTF-8, the text encoding used for every NBT string and name.
//!
//! Text is encoded per UTF-16 code unit, never per code point:
//!
//! - `0x0001..=0x007F` → 1 byte
//! - `0x0000` and `0x0080..=0x07FF` → 2 bytes
//! - `0x0800..=0xFFFF` → 3 bytes
//!
//! There are no 4-byte sequences. Characters outside the BMP go out as a
//! surrogate pair of two 3-byte sequences (the CESU-8 layout Java produces),
//! and the decoder folds such a pair back into one `char`. An unpaired
//! surrogate cannot be represented by a Rust `String`, so it is rejected as
//! malformed input.
//!
//! The length prefix is not handled here; callers frame the byte slice.

use crate::error::{NbtError, Result};

/// Number of bytes `s` occupies once encoded (length prefix excluded).
pub fn encoded_len(s: &str) -> usize {
    s.encode_utf16().map(unit_len).sum()
}

fn unit_len(unit: u16) -> usize {
    match unit {
        0x0001..=0x007F => 1,
        0x0800..=0xFFFF => 3,
        _ => 2,
    }
}

/// Append the encoding of `s` to `out`.
pub fn encode_into(s: &str, out: &mut Vec<u8>) {
    out.reserve(encoded_len(s));
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0800..=0xFFFF => {
                out.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xC0 | ((unit >> 6) & 0x1F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
}

/// Encode `s` into a fresh buffer.
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(s, &mut out);
    out
}

/// Decode exactly `bytes` as modified UTF-8.
///
/// Offsets in returned errors are relative to the start of `bytes`.
pub fn decode(bytes: &[u8]) -> Result<String> {
    if bytes.iter().all(|&b| b < 0x80) {
        return Ok(bytes.iter().map(|&b| b as char).collect());
    }

    let mut out = String::with_capacity(bytes.len());
    // High surrogate waiting for its low half, with the offset it started at.
    let mut pending: Option<(u16, usize)> = None;
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let c = bytes[i];
        let unit = match c >> 4 {
            0..=7 => {
                i += 1;
                u16::from(c)
            }
            12 | 13 => {
                if start + 2 > bytes.len() {
                    return Err(malformed(start, "partial character at end"));
                }
                let c2 = bytes[start + 1];
                if !is_continuation(c2) {
                    return Err(malformed(start + 1, "invalid continuation byte"));
                }
                i += 2;
                (u16::from(c & 0x1F) << 6) | u16::from(c2 & 0x3F)
            }
            14 => {
                if start + 3 > bytes.len() {
                    return Err(malformed(start, "partial character at end"));
                }
                let c2 = bytes[start + 1];
                let c3 = bytes[start + 2];
                if !is_continuation(c2) {
                    return Err(malformed(start + 1, "invalid continuation byte"));
                }
                if !is_continuation(c3) {
                    return Err(malformed(start + 2, "invalid continuation byte"));
                }
                i += 3;
                (u16::from(c & 0x0F) << 12) | (u16::from(c2 & 0x3F) << 6) | u16::from(c3 & 0x3F)
            }
            _ => return Err(malformed(start, "invalid leading byte")),
        };

        match (pending.take(), unit) {
            (Some((high, _)), 0xDC00..=0xDFFF) => {
                let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
                out.push(char::from_u32(code).ok_or_else(|| malformed(start, "unpaired surrogate"))?);
            }
            (Some((_, at)), _) => return Err(malformed(at, "unpaired surrogate")),
            (None, 0xD800..=0xDBFF) => pending = Some((unit, start)),
            (None, 0xDC00..=0xDFFF) => return Err(malformed(start, "unpaired surrogate")),
            (None, _) => {
                out.push(char::from_u32(u32::from(unit)).ok_or_else(|| malformed(start, "unpaired surrogate"))?);
            }
        }
    }

    if let Some((_, at)) = pending {
        return Err(malformed(at, "unpaired surrogate"));
    }
    Ok(out)
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

fn malformed(offset: usize, reason: &'static str) -> NbtError {
    NbtError::MalformedText { offset, reason }
}
