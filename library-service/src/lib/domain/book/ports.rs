use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a new book.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Retrieve book by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Retrieve all books, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Delete existing book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist new book to storage.
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve book by identifier (None if not found).
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve all books, newest first.
    async fn list(&self) -> Result<Vec<Book>, BookError>;

    /// Remove book from storage.
    ///
    /// # Returns
    /// Whether a book was removed
    async fn delete(&self, id: &BookId) -> Result<bool, BookError>;
}
