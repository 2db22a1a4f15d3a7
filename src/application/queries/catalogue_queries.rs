//! Catalogue Queries

use crate::domain::catalogue::{BookId, PageNumber, SearchChar};

/// 按首字符分页浏览查询
#[derive(Debug, Clone)]
pub struct BrowseCatalogue {
    pub prefix: SearchChar,
    pub page: PageNumber,
}

/// 获取书籍详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}
