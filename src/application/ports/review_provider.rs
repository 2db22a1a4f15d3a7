//! Review Provider Port - 第三方书评服务抽象
//!
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 书评服务错误
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 书评查询参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub title: String,
    /// 第一作者
    pub author: String,
}

impl ReviewQuery {
    /// 作者参数可能是逗号分隔的作者列表，只取第一个
    pub fn new(title: impl Into<String>, authors: &str) -> Self {
        let author = authors
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        Self {
            title: title.into(),
            author,
        }
    }
}

/// 单条书评
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub publication_dt: Option<String>,
    #[serde(default)]
    pub byline: Option<String>,
    #[serde(default)]
    pub book_title: Option<String>,
    #[serde(default)]
    pub book_author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub isbn13: Vec<String>,
}

/// 书评结果
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReviewSet {
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub results: Vec<ReviewRecord>,
}

/// Review Provider Port
#[async_trait]
pub trait ReviewProviderPort: Send + Sync {
    /// 单次请求，不重试
    async fn fetch_reviews(&self, query: &ReviewQuery) -> Result<ReviewSet, ReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_takes_first_author() {
        let query = ReviewQuery::new("Dune", "Frank Herbert, Brian Herbert");
        assert_eq!(query.author, "Frank Herbert");
        assert_eq!(query.title, "Dune");
    }

    #[test]
    fn test_query_with_empty_author() {
        let query = ReviewQuery::new("Dune", "");
        assert_eq!(query.author, "");
    }

    #[test]
    fn test_review_set_tolerates_missing_fields() {
        let set: ReviewSet = serde_json::from_str(
            r#"{"copyright": "(c) NYT", "results": [{"summary": "Good."}]}"#,
        )
        .unwrap();
        assert_eq!(set.copyright, "(c) NYT");
        assert_eq!(set.results.len(), 1);
        assert_eq!(set.results[0].summary.as_deref(), Some("Good."));
        assert!(set.results[0].isbn13.is_empty());
    }
}
