//! Review Adapter - 书评服务客户端实现

mod fake_review_client;
mod http_review_client;

pub use fake_review_client::FakeReviewClient;
pub use http_review_client::*;
