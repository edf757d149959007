//! # Validation Errors
//!
//! Every rejection of client input is a [`ValidationError`] variant. The
//! `Display` text is returned to clients verbatim, so it is phrased for them.

use thiserror::Error;

/// Validation errors for client submissions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A waitlist signup omitted its name or email.
    #[error("Name and email are required")]
    MissingContact,

    /// The email address does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail(String),

    /// A required cargo field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A cargo identifier is not a positive integer.
    #[error("invalid cargo identifier: \"{0}\"")]
    InvalidCargoId(String),
}
