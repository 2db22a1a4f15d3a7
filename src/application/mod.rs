//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookRepository、ReviewProvider）
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use ports::{
    // Repositories
    BookRepositoryPort,
    RepositoryError,
    // Review provider
    ReviewError,
    ReviewProviderPort,
    ReviewQuery,
    ReviewRecord,
    ReviewSet,
};

pub use queries::{
    BrowseCatalogue,
    GetBook,
    GetReviews,
    // Handlers
    handlers::{BrowseCatalogueHandler, CataloguePage, GetBookHandler, GetReviewsHandler},
};
