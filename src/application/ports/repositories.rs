//! Repository Ports - 出站端口
//!
//! 定义书目数据读取的抽象接口
//! 具体实现在 infrastructure 层（如 MySQL）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalogue::{Book, BookId, BookSummary, SearchChar};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Row mapping error: {0}")]
    MappingError(String),
}

// ============================================================================
// Book Repository
// ============================================================================

/// Book Repository Port
///
/// 只读；每个方法在一个池化连接上执行，返回前释放
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 统计标题以指定字符开头的书籍数量（不区分大小写）
    async fn count_by_prefix(&self, prefix: SearchChar) -> Result<u64, RepositoryError>;

    /// 按标题升序分页获取标题以指定字符开头的书籍
    async fn page_by_prefix(
        &self,
        prefix: SearchChar,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<BookSummary>, RepositoryError>;

    /// 根据 ID 查找书籍
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, RepositoryError>;

    /// 统计 + 分页
    ///
    /// 默认实现依次调用上面两个方法；实现方可以覆盖以共用同一连接
    async fn browse(
        &self,
        prefix: SearchChar,
        offset: u64,
        limit: u32,
    ) -> Result<(u64, Vec<BookSummary>), RepositoryError> {
        let total = self.count_by_prefix(prefix).await?;
        let books = self.page_by_prefix(prefix, offset, limit).await?;
        Ok((total, books))
    }
}
