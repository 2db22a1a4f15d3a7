//! In-Memory Book Repository
//!
//! 用于测试，语义与 MySQL 实现一致

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::catalogue::{Book, BookId, BookSummary, SearchChar};

/// 内存书目仓储
pub struct InMemoryBookRepository {
    books: DashMap<BookId, Book>,
    /// 设置后所有查询都返回该错误，模拟数据库不可用
    failure: Option<String>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            failure: None,
        }
    }

    /// 始终失败的仓储
    pub fn unavailable() -> Self {
        Self {
            books: DashMap::new(),
            failure: Some("database unavailable".to_string()),
        }
    }

    pub fn insert(&self, book: Book) {
        self.books.insert(book.id().clone(), book);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        match &self.failure {
            Some(msg) => Err(RepositoryError::ConnectionError(msg.clone())),
            None => Ok(()),
        }
    }

    /// 按标题升序（不区分大小写）排列的匹配项
    fn matching(&self, prefix: SearchChar) -> Vec<BookSummary> {
        let mut matches: Vec<BookSummary> = self
            .books
            .iter()
            .filter(|entry| prefix.matches(entry.title()))
            .map(|entry| entry.summary())
            .collect();

        matches.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
        });
        matches
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn count_by_prefix(&self, prefix: SearchChar) -> Result<u64, RepositoryError> {
        self.check_available()?;
        Ok(self.matching(prefix).len() as u64)
    }

    async fn page_by_prefix(
        &self,
        prefix: SearchChar,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<BookSummary>, RepositoryError> {
        self.check_available()?;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(self
            .matching(prefix)
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, RepositoryError> {
        self.check_available()?;
        Ok(self.books.get(id).map(|b| b.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str) -> Book {
        Book::from_stored(
            BookId::new(id).unwrap(),
            title.to_string(),
            "Author",
            "Genre",
            String::new(),
            1,
            1.0,
            1,
        )
    }

    #[tokio::test]
    async fn test_page_is_sorted_and_bounded() {
        let repo = InMemoryBookRepository::new();
        repo.insert(book("3", "cherry"));
        repo.insert(book("1", "Apple"));
        repo.insert(book("2", "banana"));
        repo.insert(book("4", "Cranberry"));

        let c = SearchChar::parse("c").unwrap();
        assert_eq!(repo.count_by_prefix(c).await.unwrap(), 2);

        let page = repo.page_by_prefix(c, 0, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "cherry");

        let page = repo.page_by_prefix(c, 1, 10).await.unwrap();
        assert_eq!(page[0].title, "Cranberry");

        let page = repo.page_by_prefix(c, 20, 10).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_browse_default_combines_count_and_page() {
        let repo = InMemoryBookRepository::new();
        repo.insert(book("1", "Apple"));
        repo.insert(book("2", "Avocado"));

        let (total, books) = repo
            .browse(SearchChar::parse("a").unwrap(), 0, 10)
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(books.len(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_fails_every_call() {
        let repo = InMemoryBookRepository::unavailable();
        assert!(repo.count_by_prefix(SearchChar::parse("a").unwrap()).await.is_err());
        assert!(repo.find_by_id(&BookId::new("1").unwrap()).await.is_err());
    }
}
