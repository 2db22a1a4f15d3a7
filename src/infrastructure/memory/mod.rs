//! Memory Layer - 内存实现
//!
//! 书目仓储的内存版本，用于测试

mod book_repository;

pub use book_repository::InMemoryBookRepository;
