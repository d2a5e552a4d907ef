pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDraft, CandidateBook};
use crate::core::catalog::CatalogResult;

// CatalogService owns the book lifecycle and the import workflow; it is the
// only component with business rules. Local operations go through the book
// store alone, discovery goes through the external provider gateway.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn get_all(&self) -> CatalogResult<Vec<BookEntity>>;
    async fn find_book_by_id(&self, id: &str) -> CatalogResult<BookEntity>;
    async fn search_books(&self, query: &str) -> CatalogResult<Vec<BookEntity>>;
    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<BookEntity>;
    async fn update_book(&self, id: &str, draft: &BookDraft) -> CatalogResult<BookEntity>;
    async fn remove_book(&self, id: &str) -> CatalogResult<bool>;
    async fn toggle_availability(&self, id: &str) -> CatalogResult<BookEntity>;
    async fn import_book(&self, candidate: &CandidateBook) -> CatalogResult<BookEntity>;
    async fn discover_external(&self, query: &str, limit: usize) -> CatalogResult<Vec<CandidateBook>>;
}
