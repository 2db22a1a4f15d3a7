//! Index Handler

use axum::response::Html;

use crate::infrastructure::http::views;

/// 首页：静态的字母和数字导航
pub async fn index() -> Html<String> {
    Html(views::index_page())
}
