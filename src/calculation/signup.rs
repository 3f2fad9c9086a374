//! Sign-up form validation.
//!
//! Every field is checked independently and at most one message is kept per
//! field, the first rule it fails.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{SignUpForm, SignUpValidation};

use super::password_strength::{
    MIN_STRONG_LENGTH, has_digit, has_lowercase, has_uppercase, password_length,
};

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9\s()-]+$").expect("phone pattern is valid"))
}

/// Validates a sign-up form and collects a message per failing field.
///
/// # Examples
///
/// ```
/// use supermart_engine::calculation::validate_signup;
/// use supermart_engine::models::SignUpForm;
///
/// let form = SignUpForm {
///     email: "not-an-email".to_string(),
///     ..SignUpForm::default()
/// };
/// let validation = validate_signup(&form);
///
/// assert!(!validation.is_valid());
/// assert_eq!(validation.error_for("email"), Some("Please enter a valid email address"));
/// assert_eq!(validation.error_for("first_name"), Some("First name is required"));
/// ```
pub fn validate_signup(form: &SignUpForm) -> SignUpValidation {
    let mut validation = SignUpValidation::default();

    if form.first_name.trim().is_empty() {
        validation.push("first_name", "First name is required");
    }

    if form.last_name.trim().is_empty() {
        validation.push("last_name", "Last name is required");
    }

    if form.username.trim().is_empty() {
        validation.push("username", "Username is required");
    }

    if form.email.is_empty() {
        validation.push("email", "Email is required");
    } else if !email_pattern().is_match(&form.email) {
        validation.push("email", "Please enter a valid email address");
    }

    if form.password.is_empty() {
        validation.push("password", "Password is required");
    } else if password_length(&form.password) < MIN_STRONG_LENGTH {
        validation.push("password", "Password must be at least 8 characters");
    } else if !(has_lowercase(&form.password)
        && has_uppercase(&form.password)
        && has_digit(&form.password))
    {
        validation.push(
            "password",
            "Password must contain uppercase, lowercase, and number",
        );
    }

    if form.password2.is_empty() {
        validation.push("password2", "Please confirm your password");
    } else if form.password2 != form.password {
        validation.push("password2", "Passwords do not match");
    }

    if form.company_name.trim().is_empty() {
        validation.push("company_name", "Company name is required");
    }

    if form.company_size.is_empty() {
        validation.push("company_size", "Please select company size");
    }

    if form.phone_number.trim().is_empty() {
        validation.push("phone_number", "Phone number is required");
    } else if !phone_pattern().is_match(&form.phone_number) {
        validation.push("phone_number", "Please enter a valid phone number");
    }

    if !form.agree_to_terms {
        validation.push("terms", "You must agree to the terms and conditions");
    }

    validation
}
