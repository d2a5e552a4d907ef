use async_trait::async_trait;
use crate::books::dto::CandidateBook;
use crate::core::catalog::CatalogResult;

// BookProvider is the boundary to the external bibliographic search service.
// Implementations bound their own latency and report any failure, timeouts
// included, as a Provider error; fail-open handling belongs to the caller.
#[async_trait]
pub(crate) trait BookProvider: Sync + Send {
    async fn search(&self, query: &str, limit: usize) -> CatalogResult<Vec<CandidateBook>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};
    use async_trait::async_trait;
    use crate::books::dto::CandidateBook;
    use crate::core::catalog::{CatalogError, CatalogResult};
    use crate::gateway::provider::BookProvider;

    // Canned provider for service and command tests. Records the limit it
    // was called with so clamping can be asserted after the stub is boxed.
    pub(crate) struct FixedBookProvider {
        candidates: Vec<CandidateBook>,
        fail: bool,
        last_limit: Arc<Mutex<Option<usize>>>,
    }

    impl FixedBookProvider {
        pub fn with_candidates(candidates: Vec<CandidateBook>) -> Self {
            Self {
                candidates,
                fail: false,
                last_limit: Arc::new(Mutex::new(None)),
            }
        }

        pub fn failing() -> Self {
            Self {
                candidates: vec![],
                fail: true,
                last_limit: Arc::new(Mutex::new(None)),
            }
        }

        pub fn limit_probe(&self) -> Arc<Mutex<Option<usize>>> {
            self.last_limit.clone()
        }
    }

    #[async_trait]
    impl BookProvider for FixedBookProvider {
        async fn search(&self, _query: &str, limit: usize) -> CatalogResult<Vec<CandidateBook>> {
            *self.last_limit.lock().expect("limit lock") = Some(limit);
            if self.fail {
                return Err(CatalogError::provider("provider unreachable", None, true));
            }
            Ok(self.candidates.clone())
        }
    }
}
