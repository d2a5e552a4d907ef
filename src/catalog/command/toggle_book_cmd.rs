use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ToggleBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ToggleBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleBookCommandRequest {
    pub(crate) book_id: String,
}

impl ToggleBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ToggleBookCommandResponse {
    pub book: BookEntity,
}

impl ToggleBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ToggleBookCommandRequest, ToggleBookCommandResponse> for ToggleBookCommand {
    async fn execute(&self, req: ToggleBookCommandRequest) -> Result<ToggleBookCommandResponse, CommandError> {
        self.catalog_service.toggle_availability(req.book_id.as_str())
            .await.map_err(CommandError::from).map(ToggleBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::toggle_book_cmd::{ToggleBookCommand, ToggleBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                let mut config = Configuration::default();
                config.seed_sample_data = false;
                factory::create_catalog_service(&config).await
            });
    }

    #[tokio::test]
    async fn test_should_run_toggle_book() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let toggle_cmd = ToggleBookCommand::new(svc);

        let added = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert"))
            .await.expect("should add book");
        assert!(added.book.is_available);

        let toggled = toggle_cmd.execute(ToggleBookCommandRequest::new(added.book.book_id.to_string()))
            .await.expect("should toggle book");
        assert!(!toggled.book.is_available);

        let toggled = toggle_cmd.execute(ToggleBookCommandRequest::new(added.book.book_id))
            .await.expect("should toggle book");
        assert!(toggled.book.is_available);
    }

    #[tokio::test]
    async fn test_should_fail_toggle_for_missing_book() {
        let svc = SUT_SVC.get().await.clone();
        let toggle_cmd = ToggleBookCommand::new(svc);

        let res = toggle_cmd.execute(ToggleBookCommandRequest::new("missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
