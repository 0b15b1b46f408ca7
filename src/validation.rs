//! Pure field validators shared by the auth and quiz components.

use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

// A character counts as a letter when it has a case distinction. This rejects
// caseless scripts, matching the original fold-identity test.
fn is_cased_letter(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase()
}

/// User-name charset: letters, spaces, hyphens, apostrophes. Length is checked
/// separately, so the empty string passes here.
pub(crate) fn valid_name(name: &str) -> bool {
    name.chars()
        .all(|ch| is_cased_letter(ch) || ch == ' ' || ch == '-' || ch == '\'')
}

/// Password composition: at least one letter and at least one numeric
/// character. `char::is_numeric` never matches a space.
pub(crate) fn secured_password(password: &str) -> bool {
    password.chars().any(is_cased_letter) && password.chars().any(|ch| ch.is_numeric())
}

/// Quiz-name charset: ASCII letters, digits, and whitespace only. Stricter
/// than [`valid_name`] on purpose; the two domains differ.
pub(crate) fn alphanumeric_and_space_check(name: &str) -> bool {
    lazy_static! {
        static ref QUIZ_NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9\s]*$").unwrap();
    }
    QUIZ_NAME_RE.is_match(name)
}

/// Current wall-clock time in whole seconds since the Unix epoch.
pub(crate) fn current_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_regex_accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn email_regex_rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("nodot@host"));
    }

    #[test]
    fn valid_name_allows_letters_and_punctuation() {
        assert!(valid_name("Ann"));
        assert!(valid_name("O'Brien"));
        assert!(valid_name("Jean-Luc"));
        assert!(valid_name("Mary Jane"));
        assert!(valid_name("Zoé"));
        assert!(valid_name(""));
    }

    #[test]
    fn valid_name_rejects_digits_and_symbols() {
        assert!(!valid_name("Ann3"));
        assert!(!valid_name("Ann_Lee"));
        assert!(!valid_name("Ann!"));
    }

    #[test]
    fn secured_password_needs_letter_and_digit() {
        assert!(secured_password("pass1234"));
        assert!(!secured_password("passwords"));
        assert!(!secured_password("12345678"));
    }

    #[test]
    fn secured_password_does_not_count_spaces_as_digits() {
        assert!(!secured_password("pass word"));
        assert!(secured_password("pass word1"));
    }

    #[test]
    fn quiz_name_check_is_ascii_only() {
        assert!(alphanumeric_and_space_check("My Quiz 1"));
        assert!(alphanumeric_and_space_check(""));
        assert!(!alphanumeric_and_space_check("café quiz"));
        assert!(!alphanumeric_and_space_check("quiz!"));
        assert!(!alphanumeric_and_space_check("quiz-name"));
    }

    #[test]
    fn timestamp_is_plausible_unix_seconds() {
        let ts = current_timestamp();
        // After 2023-01-01, before 2100.
        assert!(ts > 1_672_531_200);
        assert!(ts < 4_102_444_800);
    }
}
