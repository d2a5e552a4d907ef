use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDraft, CandidateBook, UNKNOWN_AUTHOR};
use crate::books::repository::BookStore;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{BookSource, CatalogError, CatalogResult};
use crate::core::domain::Configuration;
use crate::gateway::provider::BookProvider;

// External lookups are capped regardless of caller input so a single request
// cannot fan out abusively against the public provider.
const MIN_DISCOVER_LIMIT: usize = 1;
const MAX_DISCOVER_LIMIT: usize = 20;

pub(crate) struct CatalogServiceImpl {
    book_store: Box<dyn BookStore>,
    book_provider: Box<dyn BookProvider>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_store: Box<dyn BookStore>,
                      book_provider: Box<dyn BookProvider>) -> Self {
        Self {
            book_store,
            book_provider,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn get_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let mut books = self.book_store.list().await?;
        sort_by_title(&mut books);
        Ok(books)
    }

    async fn find_book_by_id(&self, id: &str) -> CatalogResult<BookEntity> {
        self.book_store.get(id).await
    }

    async fn search_books(&self, query: &str) -> CatalogResult<Vec<BookEntity>> {
        let term = query.trim();
        if term.is_empty() {
            // a blank query matches everything, not nothing
            return self.get_all().await;
        }
        let lower = term.to_lowercase();
        let mut books: Vec<BookEntity> = self.book_store.list().await?
            .into_iter()
            .filter(|book| matches_query(book, term, lower.as_str()))
            .collect();
        sort_by_title(&mut books);
        Ok(books)
    }

    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<BookEntity> {
        let book = BookEntity::from(draft);
        book.validate()?;
        let stored = self.book_store.insert(&book).await?;
        info!("added book '{}' as {}", stored.title, stored.book_id);
        Ok(stored)
    }

    async fn update_book(&self, id: &str, draft: &BookDraft) -> CatalogResult<BookEntity> {
        // clone of the stored record keeps book_id, created_at and source
        let mut merged = self.book_store.get(id).await?;
        merged.title = draft.title.to_string();
        merged.author = draft.author.to_string();
        merged.isbn = draft.isbn.clone();
        merged.published_year = draft.published_year;
        merged.genre = draft.genre.clone();
        merged.description = draft.description.clone();
        merged.cover_url = draft.cover_url.clone();
        merged.is_available = draft.is_available;
        merged.validate()?;
        self.book_store.replace(id, &merged).await
    }

    async fn remove_book(&self, id: &str) -> CatalogResult<bool> {
        let removed = self.book_store.remove(id).await?;
        if removed {
            info!("removed book {}", id);
        }
        Ok(removed)
    }

    async fn toggle_availability(&self, id: &str) -> CatalogResult<BookEntity> {
        let mut book = self.book_store.get(id).await?;
        book.is_available = !book.is_available;
        self.book_store.replace(id, &book).await
    }

    async fn import_book(&self, candidate: &CandidateBook) -> CatalogResult<BookEntity> {
        if candidate.title.trim().is_empty() {
            return Err(CatalogError::validation("imported book title must not be empty", None));
        }
        let book = BookEntity::from(candidate);
        book.validate()?;
        let stored = self.book_store.insert(&book).await?;
        info!("imported book '{}' as {}", stored.title, stored.book_id);
        Ok(stored)
    }

    async fn discover_external(&self, query: &str, limit: usize) -> CatalogResult<Vec<CandidateBook>> {
        let capped = limit.clamp(MIN_DISCOVER_LIMIT, MAX_DISCOVER_LIMIT);
        match self.book_provider.search(query, capped).await {
            Ok(candidates) => Ok(candidates),
            // discovery fails open: an empty result beats a failed page load
            Err(err @ CatalogError::Provider { .. }) => {
                warn!("external search for '{}' degraded to empty result: {}", query, err);
                Ok(vec![])
            }
            Err(err) => Err(err),
        }
    }
}

fn sort_by_title(books: &mut [BookEntity]) {
    books.sort_by(|a, b| a.title.cmp(&b.title));
}

fn matches_query(book: &BookEntity, term: &str, lower: &str) -> bool {
    book.title.to_lowercase().contains(lower)
        || book.author.to_lowercase().contains(lower)
        || book.genre.as_ref().map(|genre| genre.to_lowercase().contains(lower)).unwrap_or(false)
        // ISBNs are not case-bearing, exact substring only
        || book.isbn.as_ref().map(|isbn| isbn.contains(term)).unwrap_or(false)
}

impl From<&BookDraft> for BookEntity {
    fn from(other: &BookDraft) -> Self {
        Self {
            book_id: String::new(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.clone(),
            published_year: other.published_year,
            genre: other.genre.clone(),
            description: other.description.clone(),
            cover_url: other.cover_url.clone(),
            is_available: other.is_available,
            created_at: Utc::now().naive_utc(),
            source: BookSource::Local,
        }
    }
}

impl From<&CandidateBook> for BookEntity {
    fn from(other: &CandidateBook) -> Self {
        Self {
            book_id: String::new(),
            title: other.title.to_string(),
            author: other.author.clone()
                .filter(|author| !author.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            isbn: other.isbn.clone(),
            published_year: other.published_year,
            genre: other.genre.clone(),
            description: other.description.clone(),
            cover_url: other.cover_url.clone(),
            is_available: true,
            created_at: Utc::now().naive_utc(),
            source: BookSource::External,
        }
    }
}
