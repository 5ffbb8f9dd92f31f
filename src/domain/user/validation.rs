//! User validation utilities
//!
//! Only creation is validated. Replacement stores whatever it is given.

use thiserror::Error;

use super::entity::{User, UserDraft};

/// Errors that can occur during user validation
///
/// The display strings are returned verbatim to API clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("User payload is null.")]
    MissingPayload,

    #[error("Name is required.")]
    MissingName,

    #[error("A valid email is required.")]
    InvalidEmail,

    #[error("Password is required and must be at least {0} characters.")]
    InvalidPassword(usize),
}

pub const MIN_PASSWORD_LENGTH: usize = 8;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a name: must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if is_blank(name) {
        return Err(UserValidationError::MissingName);
    }

    Ok(())
}

/// Validate an email: non-blank and contains '@'. Nothing more.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if is_blank(email) || !email.contains('@') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Cannot be blank
/// - Minimum 8 characters (counted as chars, not bytes)
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if is_blank(password) || password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::InvalidPassword(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate a create payload and build the user to store.
///
/// Checks run in a fixed order and the first failure wins: payload, name,
/// email, password. Name and email are trimmed; the password is kept as
/// given and is still unmasked.
pub fn validate_new_user(draft: Option<UserDraft>) -> Result<User, UserValidationError> {
    let draft = draft.ok_or(UserValidationError::MissingPayload)?;

    let name = draft.name.unwrap_or_default();
    validate_name(&name)?;

    let email = draft.email.unwrap_or_default();
    validate_email(&email)?;

    let password = draft.password.unwrap_or_default();
    validate_password(&password)?;

    Ok(User::new(name.trim(), email.trim(), password))
}
