use crate::form::FieldErrors;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a registration attempt did not succeed.
///
/// Only `Validation` carries per-field messages; every other variant is the
/// generic failure path and is surfaced to the user as a re-enabled form.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration rejected: {} field error(s)", .0.len())]
    Validation(FieldErrors),

    #[error("unexpected status from registration endpoint: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("malformed registration response ({status}): {reason}")]
    MalformedResponse { status: StatusCode, reason: String },

    #[error("failed to reach registration endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RegistrationError {
    /// Field errors carried by a validation rejection, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RegistrationError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
