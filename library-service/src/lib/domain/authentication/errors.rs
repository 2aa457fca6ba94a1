use thiserror::Error;

/// Why a request could not be authenticated.
///
/// `TokenNotFound`, `InvalidJwtToken` and `UnknownUser` are expected outcomes
/// of bad or missing credentials. `LookupFailed` means the user store could
/// not answer and is not the client's fault.
#[derive(Debug, Clone, Error)]
pub enum AuthenticationError {
    #[error("Authorization token not found")]
    TokenNotFound,

    #[error("Invalid JWT token: {0}")]
    InvalidJwtToken(#[from] auth::JwtError),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("User lookup failed: {0}")]
    LookupFailed(String),
}
