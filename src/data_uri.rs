//! Embedded `data:` URI handling.
//!
//! Self-contained `.gltf` files commonly embed buffers and images as
//! RFC 2397 data URIs instead of referencing sibling files. Those never
//! take part in base resolution; the loader decodes them in place.

/// Whether a reference embeds its payload instead of naming a resource.
pub fn is_data_uri(reference: &str) -> bool {
    reference
        .get(..5)
        .map_or(false, |head| head.eq_ignore_ascii_case("data:"))
}

/// Decode the payload of a base64 data URI.
///
/// Returns `None` if the URI lacks a `;base64,` marker or the payload
/// contains a byte outside the standard alphabet. `=` padding ends the
/// payload; ASCII whitespace inside it is skipped.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    if !is_data_uri(uri) {
        return None;
    }
    let marker = ";base64,";
    let payload_start = uri.find(marker)? + marker.len();
    decode_base64(&uri[payload_start..])
}

fn decode_base64(encoded: &str) -> Option<Vec<u8>> {
    fn value(byte: u8) -> Option<u32> {
        match byte {
            b'A'..=b'Z' => Some(u32::from(byte - b'A')),
            b'a'..=b'z' => Some(u32::from(byte - b'a') + 26),
            b'0'..=b'9' => Some(u32::from(byte - b'0') + 52),
            b'+' => Some(62),
            b'/' => Some(63),
            _ => None,
        }
    }

    let mut out = Vec::with_capacity(encoded.len() / 4 * 3);
    let mut acc: u32 = 0;
    let mut bits = 0;

    for byte in encoded.bytes() {
        if byte.is_ascii_whitespace() {
            continue;
        }
        if byte == b'=' {
            break;
        }
        acc = (acc << 6) | value(byte)?;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_data_uris() {
        assert!(is_data_uri("data:application/octet-stream;base64,AAEC"));
        assert!(is_data_uri("DATA:image/png;base64,iVBOR"));
        assert!(!is_data_uri("database.bin"));
        assert!(!is_data_uri("data.bin"));
        assert!(!is_data_uri(""));
    }

    #[test]
    fn decodes_payload() {
        assert_eq!(
            decode_data_uri("data:application/octet-stream;base64,AAEC").unwrap(),
            vec![0, 1, 2]
        );
        assert_eq!(
            decode_data_uri("data:text/plain;base64,aGVsbG8=").unwrap(),
            b"hello"
        );
    }

    #[test]
    fn decodes_with_padding() {
        assert_eq!(decode_data_uri("data:;base64,TQ==").unwrap(), b"M");
        assert_eq!(decode_data_uri("data:;base64,TWE=").unwrap(), b"Ma");
    }

    #[test]
    fn skips_whitespace_in_payload() {
        assert_eq!(
            decode_data_uri("data:application/gltf-buffer;base64,AA EC\n").unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn empty_payload() {
        assert_eq!(decode_data_uri("data:;base64,").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_non_base64() {
        assert_eq!(decode_data_uri("data:text/plain,hello"), None);
        assert_eq!(decode_data_uri("buffer.bin"), None);
        assert_eq!(decode_data_uri("data:;base64,A!BC"), None);
    }
}
