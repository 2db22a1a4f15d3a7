//! Review Queries

/// 获取书评查询
#[derive(Debug, Clone)]
pub struct GetReviews {
    pub title: String,
    /// 逗号分隔的作者列表
    pub authors: String,
}
