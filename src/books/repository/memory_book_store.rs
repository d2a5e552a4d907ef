use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookStore;
use crate::core::catalog::{BookSource, CatalogError, CatalogResult};

// In-process store keyed by book_id. The service is stateless between calls,
// so this map is the single durable state of a deployment.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemoryBookStore {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    fn read_books(&self) -> CatalogResult<RwLockReadGuard<'_, HashMap<String, BookEntity>>> {
        self.books.read().map_err(|err| CatalogError::store(
            format!("book store read lock poisoned {:?}", err).as_str(), None, false))
    }

    fn write_books(&self) -> CatalogResult<RwLockWriteGuard<'_, HashMap<String, BookEntity>>> {
        self.books.write().map_err(|err| CatalogError::store(
            format!("book store write lock poisoned {:?}", err).as_str(), None, false))
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> CatalogResult<Vec<BookEntity>> {
        let books = self.read_books()?;
        Ok(books.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> CatalogResult<BookEntity> {
        let books = self.read_books()?;
        books.get(id).cloned().ok_or_else(|| CatalogError::not_found(
            format!("book not found for {}", id).as_str()))
    }

    async fn insert(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let mut books = self.write_books()?;
        let mut stored = entity.clone();
        stored.book_id = Uuid::new_v4().to_string();
        books.insert(stored.book_id.clone(), stored.clone());
        Ok(stored)
    }

    async fn replace(&self, id: &str, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let mut books = self.write_books()?;
        if !books.contains_key(id) {
            return Err(CatalogError::not_found(
                format!("book not found for {}", id).as_str()));
        }
        let mut stored = entity.clone();
        stored.book_id = id.to_string();
        books.insert(id.to_string(), stored.clone());
        Ok(stored)
    }

    async fn remove(&self, id: &str) -> CatalogResult<bool> {
        let mut books = self.write_books()?;
        Ok(books.remove(id).is_some())
    }
}

// One-time startup seeding with the sample records. Explicitly invoked by the
// store factory; the catalog service never reads ambient seed state.
pub(crate) async fn seed_sample_books(store: &dyn BookStore) -> CatalogResult<()> {
    for entity in sample_books() {
        let _ = store.insert(&entity).await?;
    }
    Ok(())
}

fn sample_books() -> Vec<BookEntity> {
    let mut petit_prince = BookEntity::new("Le Petit Prince", "Antoine de Saint-Exupéry", BookSource::Local);
    petit_prince.isbn = Some("978-2-07-040850-4".to_string());
    petit_prince.published_year = Some(1943);
    petit_prince.genre = Some("Conte philosophique".to_string());
    petit_prince.description = Some("Un pilote rencontre un mystérieux petit garçon dans le désert.".to_string());

    let mut nineteen_eighty_four = BookEntity::new("1984", "George Orwell", BookSource::Local);
    nineteen_eighty_four.isbn = Some("978-2-07-036822-8".to_string());
    nineteen_eighty_four.published_year = Some(1949);
    nineteen_eighty_four.genre = Some("Dystopie".to_string());
    nineteen_eighty_four.description = Some("Un roman sur la surveillance totalitaire.".to_string());

    let mut harry_potter = BookEntity::new("Harry Potter à l'école des sorciers", "J.K. Rowling", BookSource::Local);
    harry_potter.isbn = Some("978-2-07-054090-1".to_string());
    harry_potter.published_year = Some(1997);
    harry_potter.genre = Some("Fantasy".to_string());
    harry_potter.description = Some("Un jeune garçon découvre qu'il est un sorcier.".to_string());
    harry_potter.is_available = false;

    vec![petit_prince, nineteen_eighty_four, harry_potter]
}
