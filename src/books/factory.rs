use tracing::warn;
use crate::books::repository::BookStore;
use crate::books::repository::memory_book_store::{seed_sample_books, MemoryBookStore};
use crate::core::domain::Configuration;

pub(crate) async fn create_book_store(config: &Configuration) -> Box<dyn BookStore> {
    let store = MemoryBookStore::new();
    if config.seed_sample_data {
        if let Err(err) = seed_sample_books(&store).await {
            warn!("failed to seed sample books {}", err);
        }
    }
    Box::new(store)
}
