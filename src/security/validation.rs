use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Requires at least one dot after @ for the TLD
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

/// Input validation helpers
pub struct Validator;

impl Validator {
    /// Validates email address format
    ///
    /// ```
    /// use lighter_timeline::security::Validator;
    ///
    /// assert!(Validator::validate_email("songew@gmail.com"));
    /// assert!(!Validator::validate_email("invalid-email"));
    /// ```
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > 255 {
            return false;
        }

        if email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }

    /// Character count (not bytes) within `min..=max`
    ///
    /// ```
    /// use lighter_timeline::security::Validator;
    ///
    /// assert!(Validator::validate_length("hello", 3, 10));
    /// assert!(Validator::validate_length("안녕하세요", 1, 5));
    /// assert!(!Validator::validate_length("hi", 3, 10));
    /// ```
    pub fn validate_length(input: &str, min: usize, max: usize) -> bool {
        let len = input.chars().count();
        len >= min && len <= max
    }
}
