use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for book field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookFieldError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Total pages must be at least 1, got {0}")]
    InvalidTotalPages(i32),
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid book: {0}")]
    InvalidField(#[from] BookFieldError),

    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
