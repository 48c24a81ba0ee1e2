//! Contact form error types.

use thiserror::Error;

/// Validation failures, worded as the blocking messages shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    /// At least one field is blank after trimming.
    #[error("Please fill in all fields.")]
    EmptyField,

    /// The email address does not have a deliverable shape.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
