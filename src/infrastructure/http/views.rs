//! HTML Views
//!
//! 服务端渲染的页面。所有动态内容都经过 `escape` 转义

use std::fmt::Write;

use axum::http::StatusCode;

use crate::application::{CataloguePage, ReviewSet};
use crate::domain::catalogue::{Book, BookId, PageNumber, SearchChar};

/// HTML 转义
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 链接中的路径片段和查询参数值
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// 外部链接只接受 http / https
fn is_web_url(raw: &str) -> bool {
    reqwest::Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// 列表页链接
pub fn listing_href(c: SearchChar, page: u32) -> String {
    format!("/{}/{}", c, page)
}

/// 详情页链接，书籍 ID 作为路径片段编码
pub fn book_href(c: SearchChar, page: u32, id: &BookId) -> String {
    format!("{}/{}", listing_href(c, page), encode_component(id.as_str()))
}

/// 首页：A-Z 与 0-9 导航
pub fn index_page() -> String {
    let nav = |chars: Vec<SearchChar>| -> String {
        chars
            .into_iter()
            .map(|c| {
                format!(
                    r#"<a href="{}">{}</a>"#,
                    listing_href(c, PageNumber::first().get()),
                    c.display_char()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "<h1>Welcome to the bookshelf</h1>\n<nav class=\"letters\">\n{}\n</nav>\n<nav class=\"digits\">\n{}\n</nav>",
        nav(SearchChar::letters().collect()),
        nav(SearchChar::digits().collect()),
    );

    layout("Bookshelf", &body)
}

/// 列表页
pub fn listing_page(page: &CataloguePage) -> String {
    let d = &page.descriptor;
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>Titles beginning with {}</h1>",
        d.search_char.display_char()
    );

    if page.books.is_empty() {
        body.push_str("<p>No titles found.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for book in &page.books {
            let _ = writeln!(
                body,
                r#"<li><a href="{}">{}</a></li>"#,
                escape(&book_href(d.search_char, d.page, &book.id)),
                escape(&book.title)
            );
        }
        body.push_str("</ul>\n");
    }

    let _ = writeln!(
        body,
        "<p>Page {} of {} ({} titles)</p>",
        d.page, d.total_pages, d.total_count
    );

    body.push_str("<nav class=\"pager\">\n");
    if let Some(prev) = d.prev_page() {
        let _ = writeln!(
            body,
            r#"<a href="{}">Previous</a>"#,
            listing_href(d.search_char, prev)
        );
    }
    if let Some(next) = d.next_page() {
        let _ = writeln!(
            body,
            r#"<a href="{}">Next</a>"#,
            listing_href(d.search_char, next)
        );
    }
    body.push_str("<a href=\"/\">Back</a>\n</nav>");

    layout(
        &format!("Titles: {}", d.search_char.display_char()),
        &body,
    )
}

/// 详情页
pub fn book_page(book: &Book, back_href: &str) -> String {
    let reviews_href = format!(
        "{}/{}/reviews?title={}&author={}",
        back_href,
        encode_component(book.id().as_str()),
        encode_component(book.title()),
        encode_component(&book.authors_prose()),
    );

    let body = format!(
        r#"<h1>{title}</h1>
<dl>
<dt>Authors</dt><dd>{authors}</dd>
<dt>Summary</dt><dd>{summary}</dd>
<dt>Pages</dt><dd>{pages}</dd>
<dt>Rating</dt><dd>{rating} ({rating_count} ratings)</dd>
<dt>Genre</dt><dd>{genres}</dd>
</dl>
<nav>
<a href="{reviews}">Reviews</a>
<a href="{back}">Back</a>
</nav>"#,
        title = escape(book.title()),
        authors = escape(&book.authors_prose()),
        summary = escape(book.description()),
        pages = book.pages(),
        rating = book.rating(),
        rating_count = book.rating_count(),
        genres = escape(&book.genres_prose()),
        reviews = escape(&reviews_href),
        back = escape(back_href),
    );

    layout(book.title(), &body)
}

/// 书评页
pub fn reviews_page(title: &str, reviews: &ReviewSet, back_href: &str) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Reviews for {}</h1>", escape(title));

    if reviews.results.is_empty() {
        body.push_str("<p>No reviews found.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for review in &reviews.results {
            let field = |v: &Option<String>| escape(v.as_deref().unwrap_or_default());
            body.push_str("<li>\n");
            let _ = writeln!(
                body,
                "<h2>{}</h2>\n<p>by {}</p>\n<p>Reviewed by {} on {}</p>\n<p>{}</p>",
                field(&review.book_title),
                field(&review.book_author),
                field(&review.byline),
                field(&review.publication_dt),
                field(&review.summary),
            );
            if let Some(url) = review.url.as_deref().filter(|u| is_web_url(u)) {
                let _ = writeln!(body, r#"<a href="{}">Read the review</a>"#, escape(url));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    let _ = writeln!(
        body,
        "<footer>{}</footer>\n<a href=\"{}\">Back</a>",
        escape(&reviews.copyright),
        escape(back_href)
    );

    layout(&format!("Reviews: {}", title), &body)
}

/// 错误页
pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/\">Home</a>",
        escape(&heading),
        escape(message)
    );
    layout(&heading, &body)
}
