//! Password strength meter.
//!
//! One point each for at least eight characters, a lowercase letter, an
//! uppercase letter, a digit and a symbol. The checks are independent of
//! each other. Only ASCII letters and digits are recognised; any other
//! character counts as a symbol.

use crate::models::PasswordStrength;

/// Minimum length that earns the length point.
pub const MIN_STRONG_LENGTH: usize = 8;

/// Scores a password from 0 to 5 and attaches the matching label.
///
/// Length is measured in UTF-16 code units, the way a browser input
/// reports it.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::score_password;
///
/// assert_eq!(score_password("").score, 0);
///
/// let weak = score_password("abcdefgh");
/// assert_eq!(weak.score, 2);
/// assert_eq!(weak.label, "Weak");
///
/// let strong = score_password("Abcd123!");
/// assert_eq!(strong.score, 5);
/// assert_eq!(strong.label, "Strong");
/// ```
pub fn score_password(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::from_score(0);
    }

    let checks = [
        password_length(password) >= MIN_STRONG_LENGTH,
        has_lowercase(password),
        has_uppercase(password),
        has_digit(password),
        has_symbol(password),
    ];

    let score = checks.iter().filter(|passed| **passed).count() as u8;
    PasswordStrength::from_score(score)
}

pub(crate) fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
