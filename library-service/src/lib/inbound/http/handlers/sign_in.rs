use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::sign_up::AccessTokenResponseData;
use super::sign_up::CredentialsRequest;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn sign_in<UR, BR>(
    State(state): State<AppState<UR, BR>>,
    Json(body): Json<CredentialsRequest>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    state
        .user_service
        .sign_in(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::OK, token.into()))
}
