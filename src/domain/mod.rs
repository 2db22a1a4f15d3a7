//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Catalogue Context: 书目浏览

pub mod catalogue;

pub use catalogue::{Book, BookId, BookSummary, CatalogueError, PageDescriptor, PageNumber, SearchChar};
