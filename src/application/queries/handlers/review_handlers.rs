//! Review Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ReviewProviderPort, ReviewQuery, ReviewSet};
use crate::application::queries::GetReviews;

/// GetReviews Handler
pub struct GetReviewsHandler {
    review_provider: Arc<dyn ReviewProviderPort>,
}

impl GetReviewsHandler {
    pub fn new(review_provider: Arc<dyn ReviewProviderPort>) -> Self {
        Self { review_provider }
    }

    pub async fn handle(&self, query: GetReviews) -> Result<ReviewSet, ApplicationError> {
        if query.title.trim().is_empty() {
            return Err(ApplicationError::validation("title is required"));
        }

        let review_query = ReviewQuery::new(query.title, &query.authors);
        let reviews = self.review_provider.fetch_reviews(&review_query).await?;

        tracing::info!(
            title = %review_query.title,
            author = %review_query.author,
            results = reviews.results.len(),
            "Reviews fetched"
        );

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeReviewClient;

    #[tokio::test]
    async fn test_forwards_first_author() {
        let fake = Arc::new(FakeReviewClient::with_reviews(ReviewSet {
            copyright: "(c)".to_string(),
            results: Vec::new(),
        }));
        let handler = GetReviewsHandler::new(fake.clone());

        handler
            .handle(GetReviews {
                title: "Dune".to_string(),
                authors: "Frank Herbert, Brian Herbert".to_string(),
            })
            .await
            .unwrap();

        let seen = fake.last_query().unwrap();
        assert_eq!(seen.title, "Dune");
        assert_eq!(seen.author, "Frank Herbert");
    }

    #[tokio::test]
    async fn test_missing_title_is_validation_error() {
        let handler = GetReviewsHandler::new(Arc::new(FakeReviewClient::default()));

        let err = handler
            .handle(GetReviews {
                title: "  ".to_string(),
                authors: "Someone".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_is_external_error() {
        let handler = GetReviewsHandler::new(Arc::new(FakeReviewClient::failing(503)));

        let err = handler
            .handle(GetReviews {
                title: "Dune".to_string(),
                authors: "Frank Herbert".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
    }
}
