use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// Middleware that authenticates the bearer token and stores the resulting
/// `AuthenticatedContext` in request extensions.
pub async fn authenticate<UR, BR>(
    State(state): State<AppState<UR, BR>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    let authorization = authorization_value(req.headers());

    let context = state
        .request_authenticator
        .authenticate(authorization.as_deref())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Request authentication rejected");
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// Raw `Authorization` header value.
///
/// Bytes outside visible ASCII are replaced rather than dropped, so a
/// present but garbled header still reaches verification and fails there.
fn authorization_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
