//! Fake Review Client - 用于测试的书评客户端
//!
//! 不发起网络请求，返回预设结果或预设错误

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{ReviewError, ReviewProviderPort, ReviewQuery, ReviewSet};

/// Fake Review Client
pub struct FakeReviewClient {
    outcome: Result<ReviewSet, u16>,
    /// 最近一次收到的查询
    last_query: Mutex<Option<ReviewQuery>>,
}

impl FakeReviewClient {
    /// 始终返回给定书评
    pub fn with_reviews(reviews: ReviewSet) -> Self {
        Self {
            outcome: Ok(reviews),
            last_query: Mutex::new(None),
        }
    }

    /// 始终以给定 HTTP 状态码失败
    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
            last_query: Mutex::new(None),
        }
    }

    pub fn last_query(&self) -> Option<ReviewQuery> {
        self.last_query
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Default for FakeReviewClient {
    fn default() -> Self {
        Self::with_reviews(ReviewSet::default())
    }
}

#[async_trait]
impl ReviewProviderPort for FakeReviewClient {
    async fn fetch_reviews(&self, query: &ReviewQuery) -> Result<ReviewSet, ReviewError> {
        tracing::debug!(
            title = %query.title,
            author = %query.author,
            "FakeReviewClient: returning canned outcome"
        );

        if let Ok(mut guard) = self.last_query.lock() {
            *guard = Some(query.clone());
        }

        match &self.outcome {
            Ok(reviews) => Ok(reviews.clone()),
            Err(status) => Err(ReviewError::ServiceError(format!("HTTP {}", status))),
        }
    }
}
