use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDraft;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id comes from the request path, never the body; the controller fills
// it in after parsing.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(default)]
    pub(crate) book_id: String,
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
    #[serde(default = "default_available")]
    pub(crate) is_available: bool,
}

fn default_available() -> bool {
    true
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            isbn: None,
            published_year: None,
            genre: None,
            description: None,
            cover_url: None,
            is_available: true,
        }
    }

    pub fn build_draft(&self) -> BookDraft {
        let mut draft = BookDraft::new(self.title.as_str(), self.author.as_str());
        draft.isbn = self.isbn.clone();
        draft.published_year = self.published_year;
        draft.genre = self.genre.clone();
        draft.description = self.description.clone();
        draft.cover_url = self.cover_url.clone();
        draft.is_available = self.is_available;
        draft
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookEntity,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), &req.build_draft())
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
