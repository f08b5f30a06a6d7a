use thiserror::Error;

/// Error for CredentialId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all authentication operations.
///
/// DuplicateEmail and InvalidCredentials are expected, user-facing outcomes;
/// their messages deliberately do not say which field was wrong. The
/// remaining variants are internal failures surfaced to callers as a generic
/// error.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Registration failed. Email may already exist.")]
    DuplicateEmail,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid credential ID: {0}")]
    InvalidCredentialId(#[from] CredentialIdError),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Storage error: {0}")]
    Storage(String),
}
