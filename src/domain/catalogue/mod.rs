//! Catalogue Context - 书目限界上下文
//!
//! 职责:
//! - 书籍实体与列表条目
//! - 检索字符、页码等值对象
//! - 分页元数据计算

mod entities;
mod errors;
mod pagination;
mod value_objects;

pub use entities::{split_delimited, Book, BookSummary, LIST_DELIMITER};
pub use errors::CatalogueError;
pub use pagination::{PageDescriptor, PAGE_SIZE};
pub use value_objects::{BookId, PageNumber, SearchChar};
