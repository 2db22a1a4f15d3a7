//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod review_provider;

pub use repositories::{BookRepositoryPort, RepositoryError};
pub use review_provider::{ReviewError, ReviewProviderPort, ReviewQuery, ReviewRecord, ReviewSet};
