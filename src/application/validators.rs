use once_cell::sync::Lazy;
use regex::Regex;

/// Non-whitespace, `@`, non-whitespace, `.`, non-whitespace.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Validates that the input looks like an email address.
///
/// Surrounding whitespace is ignored; the caller stores the trimmed form.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Lowercased, trimmed form used as the waitlist key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("user+tag@example.org"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(is_valid_email("  test@example.com  "));
        assert!(is_valid_email("\ttest@example.com\n"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("spaces in@email.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Jane.Doe@Example.COM "), "jane.doe@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }
}
