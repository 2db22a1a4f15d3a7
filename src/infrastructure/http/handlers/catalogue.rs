//! Catalogue HTTP Handlers
//!
//! 分页列表与书籍详情

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{BrowseCatalogue, GetBook};
use crate::domain::catalogue::{BookId, PageNumber, SearchChar};
use crate::infrastructure::http::dto::BookJson;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::negotiate::{Negotiated, Representation};
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::http::views;

/// 按首字符分页列出书名
pub async fn list_titles(
    State(state): State<Arc<AppState>>,
    Path((search_char, page)): Path<(String, String)>,
) -> Result<Html<String>, ApiError> {
    let query = BrowseCatalogue {
        prefix: SearchChar::parse(&search_char)?,
        page: PageNumber::parse(&page)?,
    };

    let result = state.browse_catalogue_handler.handle(query).await?;

    Ok(Html(views::listing_page(&result)))
}

/// 书籍详情，按 Accept 头返回 HTML 或 JSON
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path((search_char, page, book_id)): Path<(String, String, String)>,
    Negotiated(representation): Negotiated,
) -> Result<Response, ApiError> {
    let search_char = SearchChar::parse(&search_char)?;
    let page = PageNumber::parse(&page)?;
    let book_id = BookId::new(book_id)?;

    let book = state.get_book_handler.handle(GetBook { book_id }).await?;

    tracing::debug!(book_id = %book.id(), ?representation, "Rendering book detail");

    let response = match representation {
        Representation::Html => {
            let back_href = views::listing_href(search_char, page.get());
            Html(views::book_page(&book, &back_href)).into_response()
        }
        Representation::Json => Json(BookJson::from(&book)).into_response(),
    };

    Ok(response)
}
