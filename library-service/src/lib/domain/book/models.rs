use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::book::errors::BookFieldError;
use crate::domain::book::errors::BookIdError;

/// Book aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub total_pages: i32,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new book with validated fields
#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    pub title: String,
    pub summary: String,
    pub author: String,
    pub total_pages: i32,
}

impl CreateBookCommand {
    /// Construct a new create book command.
    ///
    /// # Errors
    /// * `Empty` - Title, summary or author is empty
    /// * `InvalidTotalPages` - Fewer than one page
    pub fn new(
        title: String,
        summary: String,
        author: String,
        total_pages: i32,
    ) -> Result<Self, BookFieldError> {
        let title = Self::non_empty("Title", title)?;
        let summary = Self::non_empty("Summary", summary)?;
        let author = Self::non_empty("Author", author)?;

        if total_pages < 1 {
            return Err(BookFieldError::InvalidTotalPages(total_pages));
        }

        Ok(Self {
            title,
            summary,
            author,
            total_pages,
        })
    }

    fn non_empty(field: &'static str, value: String) -> Result<String, BookFieldError> {
        if value.is_empty() {
            Err(BookFieldError::Empty(field))
        } else {
            Ok(value)
        }
    }
}
