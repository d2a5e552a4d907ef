use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// An absent or blank query lists the whole catalog.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(q: Option<&str>) -> Self {
        Self {
            q: q.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(req.q.as_deref().unwrap_or(""))
            .await.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                let mut config = Configuration::default();
                config.seed_sample_data = false;
                factory::create_catalog_service(&config).await
            });
    }

    #[tokio::test]
    async fn test_should_run_search_books() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let search_cmd = SearchBooksCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("The Dispossessed", "Ursula K. Le Guin"))
            .await.expect("should add book");

        let res = search_cmd.execute(SearchBooksCommandRequest::new(Some("dispossessed")))
            .await.expect("should search books");
        assert_eq!(1, res.books.len());
        assert_eq!("The Dispossessed", res.books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_list_everything_without_query() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let search_cmd = SearchBooksCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new("Left Hand of Darkness", "Ursula K. Le Guin"))
            .await.expect("should add book");

        let res = search_cmd.execute(SearchBooksCommandRequest::new(None))
            .await.expect("should search books");
        assert!(!res.books.is_empty());
    }
}
