//! Byte-to-string decoding for fetched pages.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode response body as {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset ->
/// chardetng detection.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, encoding);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn extract_charset(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim_matches([' ', '"', '\''].as_ref()))
        } else {
            None
        }
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, DecodeError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        });
    }
    log::debug!("decoded {} bytes as {}", bytes.len(), encoding.name());
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::decode_html;

    #[test]
    fn respects_charset_in_content_type() {
        let bytes = b"caf\xe9"; // iso-8859-1
        let html = decode_html(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(html, "café");
    }

    #[test]
    fn bom_wins_over_header() {
        let bytes = b"\xEF\xBB\xBFhello";
        let html = decode_html(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(html, "hello");
    }

    #[test]
    fn non_ascii_content_type_falls_back_to_detection() {
        // A multibyte character around the parameter name must not trip
        // the charset parser; the body is still decoded by detection.
        let html = decode_html(b"hello", Some("aaaaaaa\u{e9}=x")).unwrap();
        assert_eq!(html, "hello");

        let html = decode_html(b"hello", Some("text/html; chars\u{e9}t=utf-8")).unwrap();
        assert_eq!(html, "hello");
    }

    #[test]
    fn plain_utf8_without_header_decodes() {
        let html = decode_html("vélo".as_bytes(), None).unwrap();
        assert_eq!(html, "vélo");
    }
}
