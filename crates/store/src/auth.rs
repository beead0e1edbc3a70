//! Demo authentication.
//!
//! There is no real identity provider behind the demo storefront. The
//! canonical demo account gets the canonical demo user; any other well-formed
//! credentials are accepted and named after the mailbox local part.
//! Registration validates the form and signs the new user straight in -
//! nothing is stored server-side.

use ecomdemo_core::{Email, EmailError, UserId};
use thiserror::Error;

use crate::models::User;

/// The demo account email.
pub const DEMO_EMAIL: &str = "test@test.com";
/// The demo account password.
pub const DEMO_PASSWORD: &str = "123456";
/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Errors from credential validation.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email address is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password is empty.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// The display name is empty.
    #[error("name cannot be empty")]
    EmptyName,

    /// The password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The password is shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least {MIN_PASSWORD_LEN} characters long")]
    PasswordTooShort,
}

/// Validate credentials and produce the signed-in user.
///
/// # Errors
///
/// Returns an error for a malformed email or an empty password. Any other
/// combination succeeds (demo-permissive by design of the original app).
pub fn authenticate(email: &str, password: &str) -> Result<User, AuthError> {
    let password = password.trim();
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }

    let email = Email::parse(email.trim())?;

    if email.matches_ignore_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
        return Ok(User {
            id: UserId::new(1),
            email,
            name: "Demo User".to_string(),
            avatar_url: None,
        });
    }

    let name = match email.local_part() {
        "" => "User".to_string(),
        local => local.to_string(),
    };

    Ok(User {
        id: UserId::new(2),
        email,
        name,
        avatar_url: None,
    })
}

/// Validate a registration form and produce the signed-in user.
///
/// The demo has no account store; a successful registration behaves like a
/// regular sign-in under the entered name and email.
///
/// # Errors
///
/// Returns an error for an empty name, a malformed email, an empty or
/// too-short password, or a confirmation that does not match.
pub fn register(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<User, AuthError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AuthError::EmptyName);
    }
    if password.trim().is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }

    let email = Email::parse(email.trim())?;

    Ok(User {
        id: UserId::new(2),
        email,
        name: name.to_string(),
        avatar_url: None,
    })
}
