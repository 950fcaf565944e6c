//! Small text helpers shared by the importers.

use std::borrow::Cow;

/// Decode bytes to a string.
///
/// Tries UTF-8 first (a BOM is handled by encoding_rs), then the charset
/// named in a `<meta charset="...">` tag near the top of the document, and
/// finally Windows-1252, which older hand-saved exports tend to use.
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    if let Some(name) = sniff_meta_charset(bytes)
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find `charset=...` in the first kilobyte of an HTML document.
fn sniff_meta_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let start = head.find("charset=")? + "charset=".len();
    let value: String = head[start..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    (!value.is_empty()).then_some(value)
}

/// Parse the leading integer of a string, the way the story editor reads
/// numeric attributes.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit, so `"412.5"` yields 412. Returns `None` when no digit is found.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_leading_int(" 412.5"), Some(412));
/// assert_eq!(parse_leading_int("-20px"), Some(-20));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("héllo".as_bytes()), "héllo");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // 0xE9 is 'é' in Windows-1252 and invalid on its own in UTF-8
        assert_eq!(decode_text(b"caf\xE9"), "café");
    }

    #[test]
    fn test_decode_uses_meta_charset() {
        let bytes = b"<meta charset=\"iso-8859-2\"><p>\xB1</p>";
        assert!(decode_text(bytes).contains('ą'));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("100"), Some(100));
        assert_eq!(parse_leading_int(" 412.5"), Some(412));
        assert_eq!(parse_leading_int("-20px"), Some(-20));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("0"), Some(0));
    }

    #[test]
    fn test_parse_leading_int_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }
}
