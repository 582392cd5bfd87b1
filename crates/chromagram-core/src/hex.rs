//! `#RRGGBB` text form of [`Rgb8`].

use crate::error::{ColorError, Result};
use crate::model::Rgb8;

/// Format as `#RRGGBB`: uppercase, two digits per channel.
pub fn format(rgb: Rgb8) -> String {
    rgb.to_string()
}

/// Parse exactly `#` followed by six hex digits, in either case.
///
/// Shorthand (`#RGB`), alpha, surrounding whitespace, and a missing `#` are
/// all rejected.
pub fn parse(s: &str) -> Result<Rgb8> {
    let malformed = || ColorError::MalformedHex(s.to_owned());

    let digits = s.strip_prefix('#').ok_or_else(malformed)?;
    // `from_str_radix` would also accept a leading '+'.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let channel = |index: usize| {
        u8::from_str_radix(&digits[2 * index..2 * index + 2], 16).map_err(|_| malformed())
    };
    Ok(Rgb8::new(channel(0)?, channel(1)?, channel(2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(s: &str) {
        assert_eq!(
            parse(s),
            Err(ColorError::MalformedHex(s.to_owned())),
            "{s:?} should be rejected"
        );
    }

    #[test]
    fn test_format_is_uppercase_and_zero_padded() {
        assert_eq!(format(Rgb8::new(0, 0, 0)), "#000000");
        assert_eq!(format(Rgb8::new(255, 0, 16)), "#FF0010");
        assert_eq!(format(Rgb8::new(0xAB, 0xCD, 0xEF)), "#ABCDEF");
        assert_eq!(format(Rgb8::new(1, 2, 3)).len(), 7);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let expected = Rgb8::new(0xAB, 0xCD, 0xEF);
        assert_eq!(parse("#ABCDEF"), Ok(expected));
        assert_eq!(parse("#abcdef"), Ok(expected));
        assert_eq!(parse("#aBcDeF"), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for s in [
            "123456", "#12345", "#GGGGGG", "", "#", "#1234567", "#FFF", " #123456",
            "#123456 ", "##12345", "#+12345", "#12 456", "#ＦＦＦＦＦＦ", "#12345\u{e9}",
        ] {
            assert_malformed(s);
        }
    }

    #[test]
    fn test_parse_multibyte_input_does_not_panic() {
        // Six bytes but not six ASCII characters.
        assert_malformed("#\u{e9}\u{e9}\u{e9}");
    }
}
