use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDraft;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    #[serde(default)]
    pub(crate) isbn: Option<String>,
    #[serde(default)]
    pub(crate) published_year: Option<i32>,
    #[serde(default)]
    pub(crate) genre: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) cover_url: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: None,
            published_year: None,
            genre: None,
            description: None,
            cover_url: None,
        }
    }

    pub fn build_draft(&self) -> BookDraft {
        let mut draft = BookDraft::new(self.title.as_str(), self.author.as_str());
        draft.isbn = self.isbn.clone();
        draft.published_year = self.published_year;
        draft.genre = self.genre.clone();
        draft.description = self.description.clone();
        draft.cover_url = self.cover_url.clone();
        draft
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.build_draft()).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
