//! Catalogue Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::application::queries::{BrowseCatalogue, GetBook};
use crate::domain::catalogue::{Book, BookSummary, PageDescriptor, PAGE_SIZE};

// ============================================================================
// Response DTOs
// ============================================================================

/// 分页列表响应
#[derive(Debug, Clone)]
pub struct CataloguePage {
    pub descriptor: PageDescriptor,
    pub books: Vec<BookSummary>,
}

// ============================================================================
// Handlers
// ============================================================================

/// BrowseCatalogue Handler
pub struct BrowseCatalogueHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl BrowseCatalogueHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: BrowseCatalogue) -> Result<CataloguePage, ApplicationError> {
        let offset = PageDescriptor::offset_for(query.page);

        let (total, books) = self
            .book_repo
            .browse(query.prefix, offset, PAGE_SIZE)
            .await?;

        let descriptor = PageDescriptor::compute(query.prefix, query.page, total);

        // 超出范围的页码返回空列表
        let books = if descriptor.is_out_of_range() {
            Vec::new()
        } else {
            books
        };

        tracing::debug!(
            prefix = %query.prefix,
            page = descriptor.page,
            total = descriptor.total_count,
            returned = books.len(),
            "Catalogue page loaded"
        );

        Ok(CataloguePage { descriptor, books })
    }
}

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        self.book_repo
            .find_by_id(&query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::{BookId, PageNumber, SearchChar};
    use crate::infrastructure::memory::InMemoryBookRepository;

    fn repo_with_titles(titles: &[&str]) -> Arc<InMemoryBookRepository> {
        let repo = InMemoryBookRepository::new();
        for (i, title) in titles.iter().enumerate() {
            repo.insert(Book::from_stored(
                BookId::new(format!("b{}", i)).unwrap(),
                title.to_string(),
                "Jane Doe",
                "Fiction",
                String::new(),
                100,
                4.0,
                10,
            ));
        }
        Arc::new(repo)
    }

    fn browse(prefix: &str, page: u32) -> BrowseCatalogue {
        BrowseCatalogue {
            prefix: SearchChar::parse(prefix).unwrap(),
            page: PageNumber::new(page).unwrap(),
        }
    }

    fn fifteen_a_titles() -> Vec<String> {
        (0..15).map(|i| format!("A title {:02}", i)).collect()
    }

    #[tokio::test]
    async fn test_first_page_returns_ten() {
        let titles = fifteen_a_titles();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let handler = BrowseCatalogueHandler::new(repo_with_titles(&refs));

        let page = handler.handle(browse("a", 1)).await.unwrap();
        assert_eq!(page.books.len(), 10);
        assert!(page.descriptor.has_next_page);
        assert!(!page.descriptor.has_prev_page);
        assert_eq!(page.books[0].title, "A title 00");
    }

    #[tokio::test]
    async fn test_second_page_returns_remainder() {
        let titles = fifteen_a_titles();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let handler = BrowseCatalogueHandler::new(repo_with_titles(&refs));

        let page = handler.handle(browse("A", 2)).await.unwrap();
        assert_eq!(page.books.len(), 5);
        assert!(!page.descriptor.has_next_page);
        assert!(page.descriptor.has_prev_page);
        assert_eq!(page.books[0].title, "A title 10");
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let handler = BrowseCatalogueHandler::new(repo_with_titles(&["Alpha", "Beta"]));

        let page = handler.handle(browse("a", 5)).await.unwrap();
        assert!(page.books.is_empty());
        assert_eq!(page.descriptor.total_pages, 1);
        assert!(!page.descriptor.has_next_page);
    }

    #[tokio::test]
    async fn test_prefix_filters_other_titles() {
        let handler =
            BrowseCatalogueHandler::new(repo_with_titles(&["apple", "Banana", "avocado", "1984"]));

        let page = handler.handle(browse("a", 1)).await.unwrap();
        let titles: Vec<&str> = page.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "avocado"]);

        let page = handler.handle(browse("1", 1)).await.unwrap();
        assert_eq!(page.books.len(), 1);
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let handler = GetBookHandler::new(repo_with_titles(&["Alpha"]));

        let err = handler
            .handle(GetBook {
                book_id: BookId::new("missing").unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_book_found() {
        let handler = GetBookHandler::new(repo_with_titles(&["Alpha"]));

        let book = handler
            .handle(GetBook {
                book_id: BookId::new("b0").unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(book.title(), "Alpha");
        assert_eq!(book.authors(), ["Jane Doe"]);
    }

    #[tokio::test]
    async fn test_repository_failure_is_repository_error() {
        let handler = BrowseCatalogueHandler::new(Arc::new(InMemoryBookRepository::unavailable()));

        let err = handler.handle(browse("a", 1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }
}
