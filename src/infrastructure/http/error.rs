//! HTTP Error Handling
//!
//! 错误以真实的 HTTP 状态码返回，响应体为简短 HTML 页面

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::views;
use crate::application::ApplicationError;
use crate::domain::catalogue::CatalogueError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    NotAcceptable,
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 内部细节只写日志，不回显给客户端
        let message = match &self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                msg.clone()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg.clone()
            }
            ApiError::NotAcceptable => {
                tracing::warn!(status = status.as_u16(), "No acceptable representation");
                return (status, "Not Acceptable").into_response();
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                "Something went wrong while reading the catalogue.".to_string()
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Service unavailable");
                "The review service is currently unavailable.".to_string()
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::ExternalServiceError(msg) => ApiError::ServiceUnavailable(msg),
        }
    }
}

impl From<CatalogueError> for ApiError {
    fn from(e: CatalogueError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_mapping() {
        let cases = [
            (
                ApplicationError::not_found("Book", "42"),
                StatusCode::NOT_FOUND,
            ),
            (
                ApplicationError::validation("bad"),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApplicationError::RepositoryError("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApplicationError::ExternalServiceError("502".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_internal_error_is_html() {
        let response = ApiError::Internal("secret dsn".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }

    #[test]
    fn test_not_acceptable_is_plain() {
        let response = ApiError::NotAcceptable.into_response();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }
}
