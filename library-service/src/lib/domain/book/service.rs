use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;

/// Domain service implementation for book operations.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        tracing::debug!(use_case = "create_book", "Executing use case");

        let book = Book {
            id: BookId::new(),
            title: command.title,
            summary: command.summary,
            author: command.author,
            total_pages: command.total_pages,
            created_at: Utc::now(),
        };

        self.repository.create(book).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        tracing::debug!(use_case = "get_book", book_id = %id, "Executing use case");

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        tracing::debug!(use_case = "list_books", "Executing use case");

        self.repository.list().await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        tracing::debug!(use_case = "delete_book", book_id = %id, "Executing use case");

        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(BookError::NotFound(id.to_string()))
        }
    }
}
