//! MySQL Persistence - 书目表只读访问

mod book_repo;
mod database;

pub use book_repo::*;
pub use database::*;
