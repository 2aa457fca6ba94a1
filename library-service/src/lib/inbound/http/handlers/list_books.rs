use axum::extract::State;
use axum::http::StatusCode;

use super::create_book::BookResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

pub async fn list_books<UR, BR>(
    State(state): State<AppState<UR, BR>>,
) -> Result<ApiSuccess<Vec<BookResponseData>>, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    state
        .book_service
        .list_books()
        .await
        .map_err(ApiError::from)
        .map(|books| {
            let data: Vec<BookResponseData> = books.iter().map(BookResponseData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
