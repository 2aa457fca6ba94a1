use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::CredentialsCommand;
use crate::domain::user::models::Login;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user and issue its first access token.
    ///
    /// # Arguments
    /// * `command` - Validated login and plaintext password
    ///
    /// # Returns
    /// Access token bound to the created user
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: CredentialsCommand) -> Result<AccessToken, UserError>;

    /// Authenticate with login and password.
    ///
    /// # Arguments
    /// * `command` - Validated login and plaintext password
    ///
    /// # Returns
    /// Access token bound to the matching user
    ///
    /// # Errors
    /// * `InvalidCredentials` - No user matches the login/password pair
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(&self, command: CredentialsCommand) -> Result<AccessToken, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by login and password digest.
    ///
    /// # Arguments
    /// * `login` - Login to search for
    /// * `password_hash` - Digest of the submitted password, compared by equality
    ///
    /// # Returns
    /// Optional user entity (None if no user matches both)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_login_password(
        &self,
        login: &Login,
        password_hash: &str,
    ) -> Result<Option<User>, UserError>;
}
