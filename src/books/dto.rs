use serde::{Deserialize, Serialize};

// Author sentinel used when the external provider returns no author; author
// is a required field downstream so the gap is filled rather than rejected.
pub(crate) const UNKNOWN_AUTHOR: &str = "Unknown";

// BookDraft carries the caller-supplied mutable fields for create and update.
// Identity fields (book_id, created_at, source) are never accepted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl BookDraft {
    pub fn new(title: &str, author: &str) -> BookDraft {
        BookDraft {
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
}

// CandidateBook is an unpersisted record returned by external discovery.
// It has no id, timestamps, availability, or source; those are assigned by
// the catalog service when the candidate is imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CandidateBook {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl CandidateBook {
    pub fn new(title: &str) -> CandidateBook {
        CandidateBook {
            title: title.to_string(),
            author: None,
            isbn: None,
            published_year: None,
            genre: None,
            description: None,
            cover_url: None,
        }
    }
}
