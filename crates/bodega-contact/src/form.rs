//! Contact form fields and validation.

use serde::{Deserialize, Serialize};

use crate::ContactError;

/// A contact form as filled in by a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Build a form from raw field values, trimming surrounding whitespace.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Check the form; the first failure blocks submission.
    ///
    /// Empty fields are reported before a malformed email, matching the
    /// order a visitor fixes them in.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::EmptyField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Loose email shape check: no whitespace, exactly one `@` with a non-empty
/// local part, and a dot inside the domain that is neither its first nor
/// last character.
///
/// Deliberately permissive — the goal is catching obvious typos, not
/// enforcing the full address grammar.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
