//! Application State
//!
//! 包含所有 Query Handlers 的应用状态，以 `Arc<AppState>` 注入到路由

use std::sync::Arc;

use crate::application::{
    // Query handlers
    BrowseCatalogueHandler, GetBookHandler, GetReviewsHandler,
    // Ports
    BookRepositoryPort, ReviewProviderPort,
};

/// 应用状态
pub struct AppState {
    // ========== Query Handlers ==========
    pub browse_catalogue_handler: BrowseCatalogueHandler,
    pub get_book_handler: GetBookHandler,
    pub get_reviews_handler: GetReviewsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        book_repo: Arc<dyn BookRepositoryPort>,
        review_provider: Arc<dyn ReviewProviderPort>,
    ) -> Self {
        Self {
            browse_catalogue_handler: BrowseCatalogueHandler::new(book_repo.clone()),
            get_book_handler: GetBookHandler::new(book_repo),
            get_reviews_handler: GetReviewsHandler::new(review_provider),
        }
    }
}
