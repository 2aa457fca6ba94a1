use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_book::BookResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

pub async fn get_book<UR, BR>(
    State(state): State<AppState<UR, BR>>,
    Path(book_id): Path<String>,
) -> Result<ApiSuccess<BookResponseData>, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    let book_id = BookId::from_string(&book_id).map_err(BookError::from)?;

    state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
