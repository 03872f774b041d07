//! `$DWGCODEPAGE` names to `encoding_rs` encodings.
//!
//! Files written before AC1021 store text in the code page named by the
//! header. Later versions are always UTF-8.

use encoding_rs::Encoding;

/// Fallback encoding for a `$DWGCODEPAGE` value.
///
/// Returns `None` when no transcoding is needed. Unknown names fall back to
/// Windows-1252, the most common code page in older drawings.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase();
    if matches!(name.as_str(), "ascii" | "utf-8" | "utf8" | "unicode") {
        return None;
    }
    let label = match name.as_str() {
        "gb2312" | "ansi_936" => "gbk".to_string(),
        "big5" | "ansi_950" => "big5".to_string(),
        "korean" | "johab" | "ansi_949" => "euc-kr".to_string(),
        "ansi_932" => "shift_jis".to_string(),
        "dos437" | "dos855" | "dos866" => "ibm866".to_string(),
        "dos852" => "windows-1250".to_string(),
        "dos857" => "windows-1254".to_string(),
        "dos869" => "windows-1253".to_string(),
        other => {
            if let Some(number) = other.strip_prefix("ansi_") {
                format!("windows-{}", number)
            } else if let Some(part) = other
                .strip_prefix("iso8859-")
                .or_else(|| other.strip_prefix("iso_8859-"))
            {
                format!("iso-8859-{}", part)
            } else {
                other.to_string()
            }
        }
    };
    Some(Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252))
}

/// Whether a `$ACADVER` string predates the switch to UTF-8 (AC1021)
pub fn uses_code_page(version: &str) -> bool {
    version < "AC1021"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_code_pages() {
        assert_eq!(encoding_from_code_page("ANSI_1252"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_from_code_page("ansi_1251"), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_iso_and_asian_code_pages() {
        assert_eq!(encoding_from_code_page("ISO8859-2"), Some(encoding_rs::ISO_8859_2));
        assert_eq!(encoding_from_code_page("GB2312"), Some(encoding_rs::GBK));
        assert_eq!(encoding_from_code_page("ANSI_932"), Some(encoding_rs::SHIFT_JIS));
    }

    #[test]
    fn test_utf8_and_unknown() {
        assert_eq!(encoding_from_code_page("UTF-8"), None);
        assert_eq!(encoding_from_code_page("SOMETHING_UNKNOWN"), Some(encoding_rs::WINDOWS_1252));
    }

    #[test]
    fn test_version_gate() {
        assert!(uses_code_page("AC1015"));
        assert!(!uses_code_page("AC1021"));
        assert!(!uses_code_page("AC1032"));
    }
}
