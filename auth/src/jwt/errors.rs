use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Signature, expiry or format check failed.
    #[error("Token verification failed: {0}")]
    VerificationFailed(String),

    #[error("Expect a 'sub' property in jwt token payload")]
    MissingSubjectClaim,
}
