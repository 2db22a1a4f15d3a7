//! Catalogue Context - Entities

use super::BookId;

/// 存储层作者/类别字段的分隔符
pub const LIST_DELIMITER: char = '|';

/// 拆分以 `|` 分隔的存储字段
///
/// 保持原始顺序，去除首尾空白并丢弃空项
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 列表页条目
#[derive(Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
}

/// 书籍详情
///
/// 不变量:
/// - authors / genres 已从存储格式拆分为有序序列
/// - 对本系统只读
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    id: BookId,
    title: String,
    authors: Vec<String>,
    genres: Vec<String>,
    description: String,
    pages: i64,
    rating: f64,
    rating_count: i64,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        title: String,
        authors: Vec<String>,
        genres: Vec<String>,
        description: String,
        pages: i64,
        rating: f64,
        rating_count: i64,
    ) -> Self {
        Self {
            id,
            title,
            authors,
            genres,
            description,
            pages,
            rating,
            rating_count,
        }
    }

    /// 从存储格式构建，authors / genres 为 `|` 分隔字符串
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: BookId,
        title: String,
        authors: &str,
        genres: &str,
        description: String,
        pages: i64,
        rating: f64,
        rating_count: i64,
    ) -> Self {
        Self::new(
            id,
            title,
            split_delimited(authors),
            split_delimited(genres),
            description,
            pages,
            rating,
            rating_count,
        )
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn rating_count(&self) -> i64 {
        self.rating_count
    }

    /// 作者列表的展示形式（逗号+空格连接）
    pub fn authors_prose(&self) -> String {
        self.authors.join(", ")
    }

    /// 类别列表的展示形式（逗号+空格连接）
    pub fn genres_prose(&self) -> String {
        self.genres.join(", ")
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}
