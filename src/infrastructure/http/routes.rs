//! HTTP Routes
//!
//! Endpoints:
//! - /                                   GET  首页（A-Z、0-9 导航）
//! - /:char/:page                        GET  按首字符分页列出书名
//! - /:char/:page/:book_id               GET  书籍详情（HTML / JSON）
//! - /:char/:page/:book_id/reviews       GET  第三方书评

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/:char/:page", get(handlers::list_titles))
        .route("/:char/:page/:book_id", get(handlers::get_book))
        .route("/:char/:page/:book_id/reviews", get(handlers::get_reviews))
}
