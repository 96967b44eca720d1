//! Unicode escape decoding: `\uXXXX` code units, UTF-16 surrogate pairs and
//! UTF-8 re-encoding

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Parses four hexadecimal digits into a UTF-16 code unit
pub fn parse_hex4(digits: [u8; 4]) -> Option<u16> {
    digits.iter().try_fold(0u16, |unit, &b| {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return None,
        };
        Some((unit << 4) | u16::from(digit))
    })
}

pub fn is_high_surrogate(unit: u16) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    LOW_SURROGATES.contains(&unit)
}

/// Combines a high and a low surrogate into the code point they encode
///
/// Returns `None` unless `high` is a high surrogate and `low` a low one.
pub fn decode_surrogate_pair(high: u16, low: u16) -> Option<u32> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    let high = u32::from(high - 0xD800);
    let low = u32::from(low - 0xDC00);
    Some(((high << 10) | low) + 0x10000)
}

/// Low eight bits of `v`
fn byte(v: u32) -> u8 {
    let [low, ..] = v.to_le_bytes();
    low
}

/// Appends the UTF-8 encoding of `code_point` to `out`
///
/// Code points above U+10FFFF cannot come out of a `\u` escape and are
/// written with the four-byte pattern regardless.
pub fn push_utf8(code_point: u32, out: &mut Vec<u8>) {
    let cp = code_point;
    if cp <= 0x7F {
        out.push(byte(cp));
    } else if cp <= 0x7FF {
        out.push(0xC0 | byte(cp >> 6));
        out.push(0x80 | byte(cp & 0x3F));
    } else if cp <= 0xFFFF {
        out.push(0xE0 | byte(cp >> 12));
        out.push(0x80 | byte((cp >> 6) & 0x3F));
        out.push(0x80 | byte(cp & 0x3F));
    } else {
        out.push(0xF0 | byte((cp >> 18) & 0x07));
        out.push(0x80 | byte((cp >> 12) & 0x3F));
        out.push(0x80 | byte((cp >> 6) & 0x3F));
        out.push(0x80 | byte(cp & 0x3F));
    }
}
