pub mod memory_book_store;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::catalog::CatalogResult;

// BookStore is the persistence boundary for book records. Each call is
// atomic on its own; there is no transaction or locking contract beyond
// that, and concurrent writes to the same id are last-write-wins.
#[async_trait]
pub(crate) trait BookStore: Sync + Send {
    // all records, in no particular order
    async fn list(&self) -> CatalogResult<Vec<BookEntity>>;

    // a single record, NotFound when the id does not exist
    async fn get(&self, id: &str) -> CatalogResult<BookEntity>;

    // stores a new record and assigns its id, ignoring any id on the input
    async fn insert(&self, entity: &BookEntity) -> CatalogResult<BookEntity>;

    // replaces an existing record wholesale, NotFound when absent
    async fn replace(&self, id: &str, entity: &BookEntity) -> CatalogResult<BookEntity>;

    // removes a record, reporting whether it existed
    async fn remove(&self, id: &str) -> CatalogResult<bool>;
}
