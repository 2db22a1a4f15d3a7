//! 应用层 - 查询（读操作）
//!
//! 本系统只有读操作

mod catalogue_queries;
mod review_queries;

pub mod handlers;

pub use catalogue_queries::*;
pub use review_queries::*;
