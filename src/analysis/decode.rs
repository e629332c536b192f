//! Text decoding of raw MSBuild log bytes.
//!
//! A leading byte order mark selects UTF-8, UTF-16 or UTF-32; without one
//! the bytes are read as UTF-8. Malformed sequences become U+FFFD, so every
//! readable log yields text.

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF32_LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const UTF32_BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Decode log bytes into text, replacing anything undecodable.
pub(crate) fn decode_log_bytes(bytes: &[u8]) -> String {
    // UTF-32 LE shares its first two bytes with the UTF-16 LE mark.
    if let Some(rest) = bytes.strip_prefix(UTF32_LE_BOM) {
        return decode_utf32(rest, u32::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF32_BE_BOM) {
        return decode_utf32(rest, u32::from_be_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }

    let rest = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(rest).into_owned()
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let trailing = !chunks.remainder().is_empty();

    let units = chunks.map(|pair| to_unit([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

fn decode_utf32(bytes: &[u8], to_scalar: fn([u8; 4]) -> u32) -> String {
    let chunks = bytes.chunks_exact(4);
    let trailing = !chunks.remainder().is_empty();

    let mut text: String = chunks
        .map(|quad| to_scalar([quad[0], quad[1], quad[2], quad[3]]))
        .map(|scalar| char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
