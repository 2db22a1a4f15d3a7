//! Persistence Layer - 数据持久化
//!
//! MySQL 存储实现

pub mod mysql;

pub use self::mysql::MySqlBookRepository;
