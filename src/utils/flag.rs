//! Country code to flag emoji conversion.

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Builds the flag emoji for a two-letter country code.
///
/// Each letter maps to its regional indicator symbol; the pair renders as a
/// flag. The code is matched case-insensitively.
///
/// Returns `None` unless `code` is exactly two ASCII letters.
///
/// # Examples
///
/// ```
/// use geoip_api::utils::flag::flag_emoji;
///
/// assert_eq!(flag_emoji("US").as_deref(), Some("🇺🇸"));
/// assert_eq!(flag_emoji("us"), flag_emoji("US"));
/// assert_eq!(flag_emoji("USA"), None);
/// ```
pub fn flag_emoji(code: &str) -> Option<String> {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }

    bytes
        .iter()
        .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_flag() {
        assert_eq!(flag_emoji("US").unwrap(), "\u{1F1FA}\u{1F1F8}");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(flag_emoji("us"), flag_emoji("US"));
        assert_eq!(flag_emoji("dE"), flag_emoji("DE"));
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(flag_emoji("AZ").unwrap(), "\u{1F1E6}\u{1F1FF}");
    }

    #[test]
    fn test_two_chars_per_flag() {
        assert_eq!(flag_emoji("JP").unwrap().chars().count(), 2);
    }

    #[test]
    fn test_invalid_codes() {
        assert!(flag_emoji("").is_none());
        assert!(flag_emoji("U").is_none());
        assert!(flag_emoji("USA").is_none());
        assert!(flag_emoji("1A").is_none());
        assert!(flag_emoji("ÜS").is_none());
    }
}
