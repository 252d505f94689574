//! Shared helpers for pagination arithmetic, input validation, and logging.
//!
//! This module holds the small rules that must behave identically wherever
//! they are used:
//! - Next-page derivation from an accumulated list length
//! - Email shape validation for newsletter signups
//! - String truncation for log previews

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `localpart@domain.tld` shape check. Anything stricter belongs to
/// the server; anything looser would send junk over the wire.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Derive the next page number to request from the number of items already
/// displayed.
///
/// Page numbers are 1-based: `floor(displayed / page_size) + 1`. The page
/// number is always derived from the accumulated count, never from a
/// separately tracked cursor.
///
/// Known limitation: changing `page_size` mid-session makes the derivation
/// overlap or skip pages. Callers keep a fixed page size per view.
///
/// # Examples
///
/// ```
/// use opina_content::utils::next_page;
///
/// assert_eq!(next_page(0, 12), 1);
/// assert_eq!(next_page(12, 12), 2);
/// assert_eq!(next_page(24, 12), 3);
/// ```
pub fn next_page(displayed: usize, page_size: usize) -> u32 {
    (displayed / page_size.max(1)) as u32 + 1
}

/// Check whether a string has a plausible email shape.
///
/// Mirrors the signup form's pre-flight check: one `@`, no whitespace, and a
/// dotted domain. Surrounding whitespace is ignored.
pub fn valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` bytes with an ellipsis and byte count
/// indicator appended. Used for previewing non-conforming response bodies.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_from_accumulated_count() {
        assert_eq!(next_page(0, 12), 1);
        assert_eq!(next_page(11, 12), 1);
        assert_eq!(next_page(12, 12), 2);
        assert_eq!(next_page(13, 12), 2);
        assert_eq!(next_page(24, 12), 3);
        assert_eq!(next_page(36, 12), 4);
    }

    #[test]
    fn test_next_page_zero_page_size_does_not_panic() {
        assert_eq!(next_page(5, 0), 6);
    }

    #[test]
    fn test_valid_email_accepts_plain_addresses() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("lector.fiel@sanluis.gov.ar"));
        assert!(valid_email("  padded@example.org  "));
    }

    #[test]
    fn test_valid_email_rejects_malformed_shapes() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email(""));
        assert!(!valid_email("   "));
        assert!(!valid_email("missing@tld"));
        assert!(!valid_email("two@@example.com"));
        assert!(!valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        let s = "ñandú ñandú";
        let result = truncate_for_log(s, 3);
        assert!(result.contains('…'));
    }
}
