use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::CredentialsCommand;
use crate::domain::user::models::Login;
use crate::domain::user::models::Password;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn sign_up<UR, BR>(
    State(state): State<AppState<UR, BR>>,
    Json(body): Json<CredentialsRequest>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    state
        .user_service
        .sign_up(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::CREATED, token.into()))
}

/// HTTP request body carrying a login and a plaintext password (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    login: String,
    password: String,
}

impl CredentialsRequest {
    pub(super) fn try_into_command(self) -> Result<CredentialsCommand, UserError> {
        let login = Login::new(self.login)?;
        let password = Password::new(self.password)?;
        Ok(CredentialsCommand::new(login, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

impl From<&AccessToken> for AccessTokenResponseData {
    fn from(token: &AccessToken) -> Self {
        Self {
            access_token: token.as_str().to_string(),
        }
    }
}
