include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tracing::info;
use crate::catalog::controller::{add_book, discover_books, find_book_by_id, import_book,
                                 remove_book, search_books, toggle_book, update_book};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::log::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::default();
    let service = catalog::factory::create_catalog_service(&config).await;
    let state = AppState::new(service);

    let app = Router::new()
        .route("/books", get(search_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/books/:id/availability", patch(toggle_book))
        .route("/external/search", get(discover_books))
        .route("/external/import", post(import_book))
        .with_state(state);

    let addr: SocketAddr = config.bind_address.parse()?;
    info!("catalog service listening on {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
