//! HTTP Middleware
//!
//! 按响应状态码记录失败请求及耗时

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 失败请求日志中间件
///
/// 5xx 记 error，4xx 记 warn；具体错误原因由 ApiError::into_response() 记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, elapsed_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, "Request rejected");
    }

    response
}
