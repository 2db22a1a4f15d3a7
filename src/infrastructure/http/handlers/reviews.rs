//! Review HTTP Handler

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::application::GetReviews;
use crate::domain::catalogue::{BookId, PageNumber, SearchChar};
use crate::infrastructure::http::dto::ReviewParams;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::http::views;

/// 代理第三方书评服务
///
/// 服务失败时返回 503，不渲染任何书评内容
pub async fn get_reviews(
    State(state): State<Arc<AppState>>,
    Path((search_char, page, book_id)): Path<(String, String, String)>,
    Query(params): Query<ReviewParams>,
) -> Result<Html<String>, ApiError> {
    let search_char = SearchChar::parse(&search_char)?;
    let page = PageNumber::parse(&page)?;
    let book_id = BookId::new(book_id)?;

    let title = params.title.clone();
    let reviews = state
        .get_reviews_handler
        .handle(GetReviews {
            title: params.title,
            authors: params.author,
        })
        .await?;

    let back_href = views::book_href(search_char, page.get(), &book_id);
    Ok(Html(views::reviews_page(&title, &reviews, &back_href)))
}
