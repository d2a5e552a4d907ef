use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::CandidateBook;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

const DEFAULT_DISCOVER_LIMIT: usize = 10;

pub(crate) struct DiscoverBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl DiscoverBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiscoverBooksCommandRequest {
    pub(crate) q: String,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl DiscoverBooksCommandRequest {
    pub fn new(q: &str, limit: Option<usize>) -> Self {
        Self {
            q: q.to_string(),
            limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DiscoverBooksCommandResponse {
    pub books: Vec<CandidateBook>,
}

impl DiscoverBooksCommandResponse {
    pub fn new(books: Vec<CandidateBook>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<DiscoverBooksCommandRequest, DiscoverBooksCommandResponse> for DiscoverBooksCommand {
    async fn execute(&self, req: DiscoverBooksCommandRequest) -> Result<DiscoverBooksCommandResponse, CommandError> {
        self.catalog_service.discover_external(
            req.q.as_str(), req.limit.unwrap_or(DEFAULT_DISCOVER_LIMIT))
            .await.map_err(CommandError::from).map(DiscoverBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::CandidateBook;
    use crate::books::repository::memory_book_store::MemoryBookStore;
    use crate::catalog::command::discover_books_cmd::{DiscoverBooksCommand, DiscoverBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::provider::testing::FixedBookProvider;

    fn create_service(provider: FixedBookProvider) -> Arc<dyn CatalogService> {
        Arc::new(CatalogServiceImpl::new(&Configuration::default(),
                                         Box::new(MemoryBookStore::new()), Box::new(provider)))
    }

    #[tokio::test]
    async fn test_should_run_discover_books() {
        let provider = FixedBookProvider::with_candidates(vec![CandidateBook::new("Dune")]);
        let discover_cmd = DiscoverBooksCommand::new(create_service(provider));

        let res = discover_cmd.execute(DiscoverBooksCommandRequest::new("dune", Some(5)))
            .await.expect("should discover books");
        assert_eq!(1, res.books.len());
    }

    #[tokio::test]
    async fn test_should_fail_open_on_provider_outage() {
        let discover_cmd = DiscoverBooksCommand::new(create_service(FixedBookProvider::failing()));

        let res = discover_cmd.execute(DiscoverBooksCommandRequest::new("dune", None))
            .await.expect("should fail open");
        assert!(res.books.is_empty());
    }
}
