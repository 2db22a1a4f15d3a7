//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::catalogue::Book;

// ============================================================================
// Book DTOs
// ============================================================================

/// 书籍详情的 JSON 表示
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookJson {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub pages: i64,
    pub rating: f64,
    pub rating_count: i64,
    pub genre: Vec<String>,
}

impl From<&Book> for BookJson {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            authors: book.authors().to_vec(),
            summary: book.description().to_string(),
            pages: book.pages(),
            rating: book.rating(),
            rating_count: book.rating_count(),
            genre: book.genres().to_vec(),
        }
    }
}

// ============================================================================
// Review DTOs
// ============================================================================

/// 书评路由的查询参数
#[derive(Debug, Deserialize)]
pub struct ReviewParams {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}
