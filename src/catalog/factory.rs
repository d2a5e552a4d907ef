use std::sync::Arc;
use crate::books;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway;

pub(crate) async fn create_catalog_service(config: &Configuration) -> Arc<dyn CatalogService> {
    let book_store = books::factory::create_book_store(config).await;
    let book_provider = gateway::factory::create_book_provider(config);
    Arc::new(CatalogServiceImpl::new(config, book_store, book_provider))
}
