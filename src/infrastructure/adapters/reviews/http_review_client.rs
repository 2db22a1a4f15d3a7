//! HTTP Review Client - 调用第三方书评服务
//!
//! 实现 ReviewProviderPort trait
//!
//! 外部书评 API:
//! GET https://api.nytimes.com/svc/books/v3/reviews.json?api-key=...&title=...&author=...
//! Response: {"status": "OK", "copyright": "...", "num_results": 1, "results": [...]}

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{ReviewError, ReviewProviderPort, ReviewQuery, ReviewSet};

/// HTTP 书评客户端配置
#[derive(Debug, Clone)]
pub struct HttpReviewClientConfig {
    /// 书评接口完整 URL
    pub url: String,
    /// API Key
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpReviewClientConfig {
    fn default() -> Self {
        Self {
            url: "https://api.nytimes.com/svc/books/v3/reviews.json".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl HttpReviewClientConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 书评客户端
///
/// 单次请求，不重试
pub struct HttpReviewClient {
    client: Client,
    config: HttpReviewClientConfig,
}

impl HttpReviewClient {
    pub fn new(config: HttpReviewClientConfig) -> Result<Self, ReviewError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReviewError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ReviewProviderPort for HttpReviewClient {
    async fn fetch_reviews(&self, query: &ReviewQuery) -> Result<ReviewSet, ReviewError> {
        tracing::debug!(
            url = %self.config.url,
            title = %query.title,
            author = %query.author,
            "Sending review request"
        );

        let response = self
            .client
            .get(&self.config.url)
            .query(&[
                ("api-key", self.config.api_key.as_str()),
                ("title", query.title.as_str()),
                ("author", query.author.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReviewError::Timeout
                } else if e.is_connect() {
                    ReviewError::NetworkError(format!("Cannot connect to review service: {}", e))
                } else {
                    ReviewError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReviewError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let reviews: ReviewSet = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ReviewError::Timeout
            } else {
                ReviewError::InvalidResponse(e.to_string())
            }
        })?;

        tracing::debug!(results = reviews.results.len(), "Review response decoded");

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Seen = Arc<Mutex<Option<HashMap<String, String>>>>;

    /// 启动本地桩服务，返回书评接口 URL
    async fn spawn_stub(status: StatusCode, body: &'static str, seen: Seen) -> String {
        let app = Router::new().route(
            "/reviews.json",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let seen = seen.clone();
                async move {
                    *seen.lock().unwrap() = Some(params);
                    (
                        status,
                        [(http::header::CONTENT_TYPE, "application/json")],
                        body,
                    )
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/reviews.json", addr)
    }

    fn query() -> ReviewQuery {
        ReviewQuery::new("The Hobbit", "J.R.R. Tolkien, Christopher Tolkien")
    }

    #[test]
    fn test_config_builder() {
        let config = HttpReviewClientConfig::new("http://example.com/r.json", "key").with_timeout(3);
        assert_eq!(config.url, "http://example.com/r.json");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout_secs, 3);
    }

    #[tokio::test]
    async fn test_success_extracts_copyright_and_results() {
        let seen: Seen = Arc::default();
        let url = spawn_stub(
            StatusCode::OK,
            r#"{"status":"OK","copyright":"Copyright (c) 2024 NYT","num_results":1,
                "results":[{"url":"http://nyt/r/1","publication_dt":"1938-03-13",
                "byline":"ANNE T. EATON","book_title":"The Hobbit",
                "book_author":"J.R.R. Tolkien","summary":"A classic.","isbn13":["9780618260300"]}]}"#,
            seen.clone(),
        )
        .await;

        let client = HttpReviewClient::new(HttpReviewClientConfig::new(url, "secret")).unwrap();
        let reviews = client.fetch_reviews(&query()).await.unwrap();

        assert_eq!(reviews.copyright, "Copyright (c) 2024 NYT");
        assert_eq!(reviews.results.len(), 1);
        assert_eq!(reviews.results[0].byline.as_deref(), Some("ANNE T. EATON"));

        let params = seen.lock().unwrap().clone().unwrap();
        assert_eq!(params.get("api-key").map(String::as_str), Some("secret"));
        assert_eq!(params.get("title").map(String::as_str), Some("The Hobbit"));
        assert_eq!(params.get("author").map(String::as_str), Some("J.R.R. Tolkien"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_service_error() {
        let url = spawn_stub(
            StatusCode::UNAUTHORIZED,
            r#"{"fault":"invalid key"}"#,
            Arc::default(),
        )
        .await;

        let client = HttpReviewClient::new(HttpReviewClientConfig::new(url, "bad")).unwrap();
        let err = client.fetch_reviews(&query()).await.unwrap_err();
        assert!(matches!(err, ReviewError::ServiceError(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let url = spawn_stub(StatusCode::OK, "not json", Arc::default()).await;

        let client = HttpReviewClient::new(HttpReviewClientConfig::new(url, "key")).unwrap();
        let err = client.fetch_reviews(&query()).await.unwrap_err();
        assert!(matches!(err, ReviewError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        // 先绑定再释放，拿到一个当前无人监听的端口
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpReviewClient::new(HttpReviewClientConfig::new(
            format!("http://{}/reviews.json", addr),
            "key",
        ))
        .unwrap();
        let err = client.fetch_reviews(&query()).await.unwrap_err();
        assert!(matches!(err, ReviewError::NetworkError(_) | ReviewError::Timeout));
    }
}
