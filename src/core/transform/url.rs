//! Percent-encoding helpers
//!
//! Both directions fall back to the original text instead of failing, so a
//! caller cannot tell "nothing to do" from "could not convert".

/// Percent-encode everything except ASCII alphanumerics and `-_.~`.
pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode `%XX` escapes. Input with a stray `%` or escapes that decode to
/// invalid UTF-8 is returned unchanged.
pub fn decode(text: &str) -> String {
    if !has_valid_escapes(text) {
        return text.to_string();
    }
    match urlencoding::decode(text) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Every `%` must start a two-hex-digit escape.
fn has_valid_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
