//! Bookshelf - 书目浏览服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalogue Context: 书目、首字符、分页
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort, ReviewProviderPort
//! - Queries: 浏览列表、书籍详情、书评查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 页面渲染 + JSON 内容协商
//! - Persistence: MySQL 只读查询
//! - Adapters: 书评 HTTP 客户端
//! - Memory: 内存书目仓库

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
