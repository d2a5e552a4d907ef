use crate::core::domain::Configuration;
use crate::gateway::openlibrary::client::OpenLibraryProvider;
use crate::gateway::provider::BookProvider;

pub(crate) fn create_book_provider(config: &Configuration) -> Box<dyn BookProvider> {
    Box::new(OpenLibraryProvider::new(config))
}
