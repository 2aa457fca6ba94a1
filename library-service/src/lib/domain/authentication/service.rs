use std::sync::Arc;

use auth::Authenticator;

use crate::domain::authentication::errors::AuthenticationError;
use crate::domain::authentication::models::AuthenticatedContext;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// A value without the prefix is returned as-is and left for verification to
/// reject.
///
/// # Errors
/// * `TokenNotFound` - Header absent, or nothing left after the prefix
pub fn extract_bearer_token(authorization: Option<&str>) -> Result<&str, AuthenticationError> {
    let value = authorization.ok_or(AuthenticationError::TokenNotFound)?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

    if token.is_empty() {
        Err(AuthenticationError::TokenNotFound)
    } else {
        Ok(token)
    }
}

/// Per-request authentication pipeline.
///
/// Extract the bearer token, verify it, then resolve its subject to a stored
/// user. Holds no per-request state; one instance serves every request.
pub struct RequestAuthenticator<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> RequestAuthenticator<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Authenticate a request from its `Authorization` header value.
    ///
    /// # Errors
    /// * `TokenNotFound` - No bearer token supplied
    /// * `InvalidJwtToken` - Bad signature, expired, or no subject claim
    /// * `UnknownUser` - Subject does not name a stored user
    /// * `LookupFailed` - The user store could not be queried
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedContext, AuthenticationError> {
        let token = extract_bearer_token(authorization)?;

        let subject = self.authenticator.anonymous().verify_access_token(token)?;

        // Stored ids are UUIDs, so any other subject cannot name a user
        let user_id = UserId::from_string(&subject.id)
            .map_err(|_| AuthenticationError::UnknownUser(subject.id.clone()))?;

        match self.repository.find_by_id(&user_id).await {
            Ok(Some(user)) => Ok(AuthenticatedContext { user_id: user.id }),
            Ok(None) => Err(AuthenticationError::UnknownUser(subject.id)),
            Err(e) => Err(AuthenticationError::LookupFailed(e.to_string())),
        }
    }
}
