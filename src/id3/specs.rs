/// Text encoding marker, the first byte of an ID3v2 text frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// 0x00: single-byte text (ASCII/Latin-1).
    Latin1,
    /// 0x01: two-byte code units (UTF-16 on disk).
    Utf16,
    /// Any other marker: text bytes are passed through undecoded.
    Unknown(u8),
}

impl TextEncoding {
    pub fn from_marker(b: u8) -> Self {
        match b {
            0 => TextEncoding::Latin1,
            1 => TextEncoding::Utf16,
            other => TextEncoding::Unknown(other),
        }
    }
}

/// Decode one text frame payload: encoding marker, then text bytes.
/// An empty payload decodes to an empty string.
pub fn decode_text_frame(payload: &[u8]) -> String {
    if payload.is_empty() {
        return String::new();
    }
    decode_text(&payload[1..], TextEncoding::from_marker(payload[0]))
}

/// Decode text bytes under the given encoding.
///
/// The `Utf16` path keeps only the second byte of each 2-byte unit and drops
/// an odd trailing byte. That reads ASCII-in-UTF-16BE correctly but mangles
/// the BOM, little-endian text, and any code point outside Latin-1. Known
/// limitation, kept on purpose; a real UTF-16 decoder slots in here.
pub fn decode_text(data: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 | TextEncoding::Unknown(_) => latin1_to_string(data),
        TextEncoding::Utf16 => data
            .chunks_exact(2)
            .map(|unit| char::from(unit[1]))
            .collect(),
    }
}

/// Single-byte text to `String`. ASCII fast path; anything else maps through
/// Latin-1 so output length always matches input length.
fn latin1_to_string(data: &[u8]) -> String {
    if data.is_ascii() {
        // SAFETY: all bytes are ASCII, which is valid UTF-8
        unsafe { String::from_utf8_unchecked(data.to_vec()) }
    } else {
        data.iter().map(|&b| char::from(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload() {
        assert_eq!(decode_text_frame(&[]), "");
    }

    #[test]
    fn latin1_verbatim() {
        assert_eq!(decode_text_frame(b"\x00Abc"), "Abc");
    }

    #[test]
    fn latin1_preserves_embedded_nulls() {
        assert_eq!(decode_text_frame(b"\x00Ab\x00\x00"), "Ab\0\0");
    }

    #[test]
    fn latin1_high_bytes() {
        // 0xE9 is 'é' in Latin-1
        assert_eq!(decode_text_frame(&[0x00, 0xE9]), "é");
    }

    #[test]
    fn utf16_ascii_subset() {
        let payload = [0x01, 0x00, b'A', 0x00, b'b', 0x00, b'c'];
        assert_eq!(decode_text_frame(&payload), "Abc");
    }

    #[test]
    fn utf16_odd_trailing_byte_dropped() {
        let payload = [0x01, 0x00, b'A', 0x00, b'b', 0x00];
        assert_eq!(decode_text_frame(&payload), "Ab");
    }

    #[test]
    fn unknown_marker_passthrough() {
        assert_eq!(decode_text_frame(b"\x07raw"), "raw");
    }

    #[test]
    fn marker_byte_is_consumed() {
        // A payload of just the marker yields nothing
        assert_eq!(decode_text_frame(&[0x00]), "");
        assert_eq!(decode_text_frame(&[0x01]), "");
    }
}
