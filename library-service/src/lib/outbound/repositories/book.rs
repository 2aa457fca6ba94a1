use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    summary: String,
    author: String,
    total_pages: i32,
    created_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: BookId(row.id),
            title: row.title,
            summary: row.summary,
            author: row.author,
            total_pages: row.total_pages,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, summary, author, total_pages, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(book.id.0)
        .bind(&book.title)
        .bind(&book.summary)
        .bind(&book.author)
        .bind(book.total_pages)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, summary, author, total_pages, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(row.map(Book::from))
    }

    async fn list(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, summary, author, total_pages, created_at
            FROM books
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn delete(&self, id: &BookId) -> Result<bool, BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() == 1)
    }
}
