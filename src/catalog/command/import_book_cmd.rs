use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::CandidateBook;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ImportBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ImportBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The body is typically a candidate taken verbatim from a prior external
// search, but any candidate satisfying the required-field invariants works.
#[derive(Debug, Deserialize)]
pub(crate) struct ImportBookCommandRequest {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) author: Option<String>,
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

impl ImportBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            author: None,
            isbn: None,
            published_year: None,
            genre: None,
            description: None,
            cover_url: None,
        }
    }

    pub fn build_candidate(&self) -> CandidateBook {
        let mut candidate = CandidateBook::new(self.title.as_str());
        candidate.author = self.author.clone();
        candidate.isbn = self.isbn.clone();
        candidate.published_year = self.published_year;
        candidate.genre = self.genre.clone();
        candidate.description = self.description.clone();
        candidate.cover_url = self.cover_url.clone();
        candidate
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ImportBookCommandResponse {
    pub book: BookEntity,
}

impl ImportBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ImportBookCommandRequest, ImportBookCommandResponse> for ImportBookCommand {
    async fn execute(&self, req: ImportBookCommandRequest) -> Result<ImportBookCommandResponse, CommandError> {
        self.catalog_service.import_book(&req.build_candidate())
            .await.map_err(CommandError::from).map(ImportBookCommandResponse::new)
    }
}
