use thiserror::Error;

/// Error type for token operations.
///
/// Decoding failures are distinguished here for diagnostics; public
/// endpoints collapse them into a single invalid outcome so callers cannot
/// probe token structure.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
