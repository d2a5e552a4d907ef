use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::books::dto::{CandidateBook, UNKNOWN_AUTHOR};
use crate::core::catalog::CatalogResult;
use crate::core::domain::Configuration;
use crate::gateway::provider::BookProvider;

// Only the fields the candidate mapping consumes; keeps provider payloads small.
const SEARCH_FIELDS: &str = "title,author_name,isbn,first_publish_year,subject,cover_i";
const USER_AGENT: &str = "bookshelf/0.1";

// Read-only client for the public OpenLibrary search API
// (https://openlibrary.org/search.json).
#[derive(Debug)]
pub struct OpenLibraryProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OpenLibraryProvider {
    pub(crate) fn new(config: &Configuration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.provider_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.provider_timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

// A single OpenLibrary search document. Every field may be absent; a partial
// doc still maps to a candidate rather than failing the whole search.
#[derive(Debug, Deserialize)]
struct SearchDoc {
    #[serde(default)]
    title: String,
    author_name: Option<Vec<String>>,
    isbn: Option<Vec<String>>,
    first_publish_year: Option<i32>,
    subject: Option<Vec<String>>,
    cover_i: Option<i64>,
}

#[async_trait]
impl BookProvider for OpenLibraryProvider {
    async fn search(&self, query: &str, limit: usize) -> CatalogResult<Vec<CandidateBook>> {
        let limit_param = limit.to_string();
        let response = self.client
            .get(format!("{}/search.json", self.base_url))
            .timeout(self.timeout)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("q", query),
                ("limit", limit_param.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?
            .error_for_status()?;
        let result = response.json::<SearchResponse>().await?;
        info!("openlibrary returned {} docs for '{}'", result.docs.len(), query);
        Ok(result.docs.iter().map(map_to_candidate).collect())
    }
}

// Multi-valued provider fields keep only their first element; a missing
// author maps to the Unknown sentinel since author is required downstream.
fn map_to_candidate(doc: &SearchDoc) -> CandidateBook {
    CandidateBook {
        title: doc.title.clone(),
        author: Some(doc.author_name.as_ref()
            .and_then(|authors| authors.first().cloned())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())),
        isbn: doc.isbn.as_ref().and_then(|isbns| isbns.first().cloned()),
        published_year: doc.first_publish_year,
        genre: doc.subject.as_ref().and_then(|subjects| subjects.first().cloned()),
        description: None,
        cover_url: doc.cover_i.map(|id| format!("https://covers.openlibrary.org/b/id/{}-M.jpg", id)),
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::UNKNOWN_AUTHOR;
    use crate::gateway::openlibrary::client::{map_to_candidate, SearchDoc, SearchResponse};

    #[tokio::test]
    async fn test_should_map_full_doc() {
        let doc = SearchDoc {
            title: "Dune".to_string(),
            author_name: Some(vec!["Frank Herbert".to_string(), "Other".to_string()]),
            isbn: Some(vec!["9780441013593".to_string(), "0441013597".to_string()]),
            first_publish_year: Some(1965),
            subject: Some(vec!["Science fiction".to_string(), "Deserts".to_string()]),
            cover_i: Some(12345),
        };
        let candidate = map_to_candidate(&doc);
        assert_eq!("Dune", candidate.title.as_str());
        assert_eq!(Some("Frank Herbert".to_string()), candidate.author);
        assert_eq!(Some("9780441013593".to_string()), candidate.isbn);
        assert_eq!(Some(1965), candidate.published_year);
        assert_eq!(Some("Science fiction".to_string()), candidate.genre);
        assert_eq!(Some("https://covers.openlibrary.org/b/id/12345-M.jpg".to_string()), candidate.cover_url);
        assert_eq!(None, candidate.description);
    }

    #[tokio::test]
    async fn test_should_map_sparse_doc() {
        let doc = SearchDoc {
            title: "Dune".to_string(),
            author_name: None,
            isbn: None,
            first_publish_year: None,
            subject: None,
            cover_i: None,
        };
        let candidate = map_to_candidate(&doc);
        assert_eq!(Some(UNKNOWN_AUTHOR.to_string()), candidate.author);
        assert_eq!(None, candidate.isbn);
        assert_eq!(None, candidate.published_year);
        assert_eq!(None, candidate.genre);
        assert_eq!(None, candidate.cover_url);
    }

    #[tokio::test]
    async fn test_should_decode_search_response() {
        let json = r#"{
            "numFound": 2,
            "docs": [
                {"title": "Dune", "author_name": ["Frank Herbert"], "first_publish_year": 1965},
                {"title": "Dune Messiah"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(json).expect("should decode response");
        assert_eq!(2, response.docs.len());
        let candidates: Vec<_> = response.docs.iter().map(map_to_candidate).collect();
        assert_eq!(Some("Frank Herbert".to_string()), candidates[0].author);
        assert_eq!(Some(UNKNOWN_AUTHOR.to_string()), candidates[1].author);
    }
}
