//! Catalogue Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("无效的检索字符: {0}")]
    InvalidSearchChar(String),

    #[error("无效的页码: {0}")]
    InvalidPage(String),

    #[error("无效的书籍 ID: {0}")]
    InvalidBookId(String),
}
