use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum CatalogError {
    // The backing store could not complete a read or write. Retryable when the
    // failure is transient; the service itself never retries.
    Store {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // The external bibliographic provider failed (network, timeout, bad payload).
    Provider {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn store(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Store { message: message.to_string(), reason_code, retryable }
    }

    pub fn provider(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Provider { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Store { retryable, .. } => { *retryable }
            CatalogError::Provider { retryable, .. } => { *retryable }
            CatalogError::NotFound { .. } => { false }
            CatalogError::Validation { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        let retryable = err.is_timeout() || err.is_connect();
        CatalogError::provider(
            format!("provider request {:?}", err).as_str(),
            err.status().map(|s| s.as_u16().to_string()), retryable)
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Store { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::Provider { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the catalog service and its gateways.
pub type CatalogResult<T> = Result<T, CatalogError>;

// Where a record came from: entered directly by the user or imported from
// the external bibliographic provider. Assigned by the catalog service only.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum BookSource {
    Local,
    External,
}

impl From<String> for BookSource {
    fn from(s: String) -> Self {
        match s.as_str() {
            "local" => BookSource::Local,
            "external" => BookSource::External,
            _ => BookSource::Local,
        }
    }
}

impl Display for BookSource {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookSource::Local => write!(f, "local"),
            BookSource::External => write!(f, "external"),
        }
    }
}
