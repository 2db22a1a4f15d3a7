//! MySQL Book Repository

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{FromRow, MySql};

use super::DbPool;
use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::catalogue::{Book, BookId, BookSummary, SearchChar};

/// 预生成的 SQL 语句（表名来自配置，启动时已校验为合法标识符）
#[derive(Debug, Clone)]
struct BookQueries {
    count_by_prefix: String,
    page_by_prefix: String,
    find_by_id: String,
}

impl BookQueries {
    fn for_table(table: &str) -> Self {
        Self {
            count_by_prefix: format!(
                "SELECT COUNT(*) AS total FROM `{table}` WHERE LOWER(title) LIKE ?"
            ),
            page_by_prefix: format!(
                "SELECT CAST(book_id AS CHAR) AS book_id, title FROM `{table}` WHERE LOWER(title) LIKE ? ORDER BY title ASC LIMIT ? OFFSET ?"
            ),
            // book_id 可能是整数列，与数值列一样统一 CAST
            find_by_id: format!(
                r#"
                SELECT CAST(book_id AS CHAR) AS book_id, title, authors, genres, description,
                       CAST(pages AS SIGNED) AS pages,
                       CAST(rating AS DOUBLE) AS rating,
                       CAST(rating_count AS SIGNED) AS rating_count
                FROM `{table}` WHERE book_id = ?
                "#
            ),
        }
    }
}

/// MySQL Book Repository
pub struct MySqlBookRepository {
    pool: DbPool,
    queries: BookQueries,
}

impl MySqlBookRepository {
    pub fn new(pool: DbPool, table: &str) -> Self {
        Self {
            pool,
            queries: BookQueries::for_table(table),
        }
    }

    /// 从池中获取连接；连接在 guard 离开作用域时归还
    async fn acquire(&self) -> Result<PoolConnection<MySql>, RepositoryError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))
    }

    async fn count_on(
        &self,
        conn: &mut PoolConnection<MySql>,
        prefix: SearchChar,
    ) -> Result<u64, RepositoryError> {
        let row: CountRow = sqlx::query_as(&self.queries.count_by_prefix)
            .bind(prefix.like_pattern())
            .fetch_one(&mut **conn)
            .await
            .map_err(map_sqlx_error)?;

        u64::try_from(row.total).map_err(|e| RepositoryError::MappingError(e.to_string()))
    }

    async fn page_on(
        &self,
        conn: &mut PoolConnection<MySql>,
        prefix: SearchChar,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<BookSummary>, RepositoryError> {
        let rows: Vec<BookSummaryRow> = sqlx::query_as(&self.queries.page_by_prefix)
            .bind(prefix.like_pattern())
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **conn)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(BookSummary::try_from).collect()
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::MappingError(e.to_string()),
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionError(e.to_string())
        }
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

#[derive(FromRow)]
struct CountRow {
    total: i64,
}

#[derive(FromRow)]
struct BookSummaryRow {
    book_id: String,
    title: String,
}

impl TryFrom<BookSummaryRow> for BookSummary {
    type Error = RepositoryError;

    fn try_from(row: BookSummaryRow) -> Result<Self, Self::Error> {
        Ok(BookSummary {
            id: BookId::new(row.book_id)
                .map_err(|e| RepositoryError::MappingError(e.to_string()))?,
            title: row.title,
        })
    }
}

#[derive(FromRow)]
struct BookRow {
    book_id: String,
    title: String,
    authors: Option<String>,
    genres: Option<String>,
    description: Option<String>,
    pages: Option<i64>,
    rating: Option<f64>,
    rating_count: Option<i64>,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book::from_stored(
            BookId::new(row.book_id).map_err(|e| RepositoryError::MappingError(e.to_string()))?,
            row.title,
            row.authors.as_deref().unwrap_or_default(),
            row.genres.as_deref().unwrap_or_default(),
            row.description.unwrap_or_default(),
            row.pages.unwrap_or_default(),
            row.rating.unwrap_or_default(),
            row.rating_count.unwrap_or_default(),
        ))
    }
}

#[async_trait]
impl BookRepositoryPort for MySqlBookRepository {
    async fn count_by_prefix(&self, prefix: SearchChar) -> Result<u64, RepositoryError> {
        let mut conn = self.acquire().await?;
        self.count_on(&mut conn, prefix).await
    }

    async fn page_by_prefix(
        &self,
        prefix: SearchChar,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<BookSummary>, RepositoryError> {
        let mut conn = self.acquire().await?;
        self.page_on(&mut conn, prefix, offset, limit).await
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, RepositoryError> {
        let mut conn = self.acquire().await?;

        let row: Option<BookRow> = sqlx::query_as(&self.queries.find_by_id)
            .bind(id.as_str())
            .fetch_optional(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Book::try_from).transpose()
    }

    async fn browse(
        &self,
        prefix: SearchChar,
        offset: u64,
        limit: u32,
    ) -> Result<(u64, Vec<BookSummary>), RepositoryError> {
        // 统计和分页共用一个连接
        let mut conn = self.acquire().await?;
        let total = self.count_on(&mut conn, prefix).await?;
        let books = self.page_on(&mut conn, prefix, offset, limit).await?;
        Ok((total, books))
    }
}
