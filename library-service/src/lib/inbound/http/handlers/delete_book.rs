use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::authentication::models::AuthenticatedContext;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_book<UR, BR>(
    State(state): State<AppState<UR, BR>>,
    Extension(context): Extension<AuthenticatedContext>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    let book_id = BookId::from_string(&id).map_err(BookError::from)?;

    tracing::info!(user_id = %context.user_id, book_id = %book_id, "Deleting book");

    state
        .book_service
        .delete_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
