use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::AuthenticatedContext;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

pub async fn create_book<UR, BR>(
    State(state): State<AppState<UR, BR>>,
    Extension(context): Extension<AuthenticatedContext>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<BookResponseData>, ApiError>
where
    UR: UserRepository,
    BR: BookRepository,
{
    tracing::info!(user_id = %context.user_id, "Creating book");

    state
        .book_service
        .create_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for creating a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    title: String,
    summary: String,
    author: String,
    total_pages: i32,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, BookError> {
        Ok(CreateBookCommand::new(
            self.title,
            self.summary,
            self.author,
            self.total_pages,
        )?)
    }
}

/// Book representation shared by every book endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponseData {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub total_pages: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            summary: book.summary.clone(),
            author: book.author.clone(),
            total_pages: book.total_pages,
            created_at: book.created_at,
        }
    }
}
