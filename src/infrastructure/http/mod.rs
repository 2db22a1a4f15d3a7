//! HTTP Layer - 服务端渲染页面 + JSON 详情

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod negotiate;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use error::ApiError;
pub use negotiate::{negotiate, Negotiated, Representation};
pub use routes::create_routes;
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
