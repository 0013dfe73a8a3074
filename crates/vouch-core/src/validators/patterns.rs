//! Shared character sets and layout patterns.
//!
//! The email local-part alphabet and the two accepted date-time layouts live
//! here so the validators only carry the decision logic.

use lazy_static::lazy_static;
use regex::Regex;

// =========================================================================
// EMAIL LOCAL-PART CHARACTER SETS
// =========================================================================

/// Punctuation accepted in an email local part, shared by both charsets.
///
/// The backslash is part of the set.
pub const LOCAL_PUNCTUATION: &str = "/\\()\"':,.;<>~!@#$%^&*|+=[]{}`?-";

/// Ellipsis as it appears in data registered by older deployments: the UTF-8
/// bytes of `…` decoded as Windows-1252, i.e. `â`, `€`, `¦`.
pub const LEGACY_ELLIPSIS: &str = "\u{e2}\u{20ac}\u{a6}";

/// The ellipsis proper.
pub const ELLIPSIS: &str = "\u{2026}";

// =========================================================================
// DATE-TIME LAYOUTS
// =========================================================================

lazy_static! {
    /// `DD-MM-YYYY HH:MM:SS`, day and time fields one or two digits wide.
    ///
    /// A single-digit day may carry one leading space.
    pub static ref DAY_FIRST_PATTERN: Regex = Regex::new(
        r"^(?P<day>[0-9]{1,2}| [0-9])-(?P<month>[0-9]{1,2})-(?P<year>[0-9]{4})[\s\x1C-\x1F]+(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{1,2}):(?P<second>[0-9]{1,2})$"
    ).unwrap();

    /// `YYYY-MM-DD HH:MM:SS`, month, day and time fields one or two digits wide.
    ///
    /// A single-digit day may carry one leading space.
    pub static ref YEAR_FIRST_PATTERN: Regex = Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2}| [0-9])[\s\x1C-\x1F]+(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{1,2}):(?P<second>[0-9]{1,2})$"
    ).unwrap();
}

// =========================================================================
// WHITESPACE
// =========================================================================

/// Check if `c` is stripped from the ends of a candidate value.
///
/// Unicode whitespace plus the ASCII information separators `\x1C`..=`\x1F`.
pub fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// Strip leading and trailing [`is_strippable`] characters.
pub fn strip(value: &str) -> &str {
    value.trim_matches(is_strippable)
}

/// Check if `c` may appear in an email local part under the legacy charset.
pub fn is_legacy_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c) || LEGACY_ELLIPSIS.contains(c)
}

/// Check if `c` may appear in an email local part under the normalized charset.
pub fn is_normalized_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c) || ELLIPSIS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_charset() {
        assert!(is_legacy_local_char('a'));
        assert!(is_legacy_local_char('Z'));
        assert!(is_legacy_local_char('7'));
        assert!(is_legacy_local_char('\\'));
        assert!(is_legacy_local_char('`'));
        assert!(is_legacy_local_char('\u{20ac}'));
        assert!(!is_legacy_local_char('\u{2026}'));
        assert!(!is_legacy_local_char(' '));
        assert!(!is_legacy_local_char('_'));
        assert!(!is_legacy_local_char('é'));
    }

    #[test]
    fn test_normalized_charset() {
        assert!(is_normalized_local_char('\u{2026}'));
        assert!(!is_normalized_local_char('\u{20ac}'));
        assert!(is_normalized_local_char('+'));
    }

    #[test]
    fn test_day_first_pattern() {
        assert!(DAY_FIRST_PATTERN.is_match("31-12-2023 00:00:00"));
        assert!(DAY_FIRST_PATTERN.is_match("1-2-2023 3:04:05"));
        assert!(!DAY_FIRST_PATTERN.is_match("2023-12-31 00:00:00"));
        assert!(!DAY_FIRST_PATTERN.is_match("31-12-23 00:00:00"));
        assert!(!DAY_FIRST_PATTERN.is_match("31-12-2023 00:00:00 extra"));
    }

    #[test]
    fn test_space_padded_day() {
        assert!(YEAR_FIRST_PATTERN.is_match("2023-12- 1 00:00:00"));
        assert!(DAY_FIRST_PATTERN.is_match(" 1-12-2023 00:00:00"));
        assert!(!YEAR_FIRST_PATTERN.is_match("2023-12- 10 00:00:00"));
        assert!(!YEAR_FIRST_PATTERN.is_match("2023- 1-01 00:00:00"));
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("  user@domain.com\n"), "user@domain.com");
        assert_eq!(strip("\x1Cuser@domain.com\x1F"), "user@domain.com");
        assert_eq!(strip("\u{3000}2023-12-31\t"), "2023-12-31");
        assert_eq!(strip("a b"), "a b");
        assert!(!is_strippable('\x1B'));
    }

    #[test]
    fn test_year_first_pattern() {
        assert!(YEAR_FIRST_PATTERN.is_match("2023-12-31 23:59:59"));
        assert!(!YEAR_FIRST_PATTERN.is_match("2023-12-31"));
        assert!(!YEAR_FIRST_PATTERN.is_match("2023-12-31 23:59"));
    }
}
