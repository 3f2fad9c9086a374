//! Sign-up form models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The account registration form as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub password2: String,
    /// Registered business name.
    pub company_name: String,
    /// Size bracket picked from the drop-down.
    pub company_size: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Whether the terms and conditions box is ticked.
    pub agree_to_terms: bool,
}

/// Field-level messages produced by sign-up validation.
///
/// Keys are the form's field names, except that an unticked terms box is
/// reported under `terms`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignUpValidation {
    /// Field name to message. Empty when the form is valid.
    pub errors: BTreeMap<String, String>,
}

impl SignUpValidation {
    /// Returns true when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a field, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub(crate) fn push(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }
}
