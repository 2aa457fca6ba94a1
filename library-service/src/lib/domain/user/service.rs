use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::UserIdentity;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::CredentialsCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Identity factory built from the validated secrets
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, command: CredentialsCommand) -> Result<AccessToken, UserError> {
        tracing::debug!(use_case = "sign_up", login = %command.login, "Executing use case");

        let password_hash = self
            .authenticator
            .anonymous()
            .hash_password(command.password.as_str());

        let user = User {
            id: UserId::new(),
            login: command.login,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        let access_token = self
            .authenticator
            .known(created_user.id.to_string())
            .issue_access_token()?;

        Ok(AccessToken(access_token))
    }

    async fn sign_in(&self, command: CredentialsCommand) -> Result<AccessToken, UserError> {
        tracing::debug!(use_case = "sign_in", login = %command.login, "Executing use case");

        let password_hash = self
            .authenticator
            .anonymous()
            .hash_password(command.password.as_str());

        let user = self
            .repository
            .find_by_login_password(&command.login, &password_hash)
            .await?;

        match self.authenticator.identify(user.map(|u| u.id.to_string())) {
            UserIdentity::Known(user) => Ok(AccessToken(user.issue_access_token()?)),
            UserIdentity::Anonymous(_) => Err(UserError::InvalidCredentials),
        }
    }
}
