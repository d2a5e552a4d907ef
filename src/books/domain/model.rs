use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::catalog::{BookSource, CatalogError, CatalogResult};
use crate::utils::date::serializer;

pub(crate) const MIN_PUBLISHED_YEAR: i32 = 1000;
pub(crate) const MAX_PUBLISHED_YEAR: i32 = 2100;

// BookEntity is a locally-owned catalog record. book_id is assigned by the
// store on insert; created_at and source are assigned by the catalog service
// and never taken from caller input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    pub source: BookSource,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, source: BookSource) -> Self {
        Self {
            book_id: String::new(), // assigned by the store on insert
            title: title.to_string(),
            author: author.to_string(),
            isbn: None,
            published_year: None,
            genre: None,
            description: None,
            cover_url: None,
            is_available: true,
            created_at: Utc::now().naive_utc(),
            source,
        }
    }

    // Required-field and range invariants; pure, no side effects.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::validation("book title must not be empty", None));
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::validation("book author must not be empty", None));
        }
        if let Some(year) = self.published_year {
            if !(MIN_PUBLISHED_YEAR..=MAX_PUBLISHED_YEAR).contains(&year) {
                return Err(CatalogError::validation(
                    format!("published year {} outside {}..={}",
                            year, MIN_PUBLISHED_YEAR, MAX_PUBLISHED_YEAR).as_str(), None));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::catalog::{BookSource, CatalogError};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Dune", "Frank Herbert", BookSource::Local);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Frank Herbert", book.author.as_str());
        assert_eq!(BookSource::Local, book.source);
        assert!(book.is_available);
        assert!(book.book_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_validate_books() {
        let mut book = BookEntity::new("Dune", "Frank Herbert", BookSource::Local);
        book.published_year = Some(1965);
        assert!(book.validate().is_ok());
    }

    #[tokio::test]
    async fn test_should_fail_validation_for_blank_title() {
        let book = BookEntity::new("  ", "Frank Herbert", BookSource::Local);
        assert!(matches!(book.validate(), Err(CatalogError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_validation_for_blank_author() {
        let book = BookEntity::new("Dune", "", BookSource::Local);
        assert!(matches!(book.validate(), Err(CatalogError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_validation_for_out_of_range_year() {
        let mut book = BookEntity::new("Dune", "Frank Herbert", BookSource::Local);
        book.published_year = Some(999);
        assert!(book.validate().is_err());
        book.published_year = Some(2101);
        assert!(book.validate().is_err());
        book.published_year = Some(1000);
        assert!(book.validate().is_ok());
        book.published_year = Some(2100);
        assert!(book.validate().is_ok());
    }
}
