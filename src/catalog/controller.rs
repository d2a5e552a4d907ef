use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::discover_books_cmd::{DiscoverBooksCommand, DiscoverBooksCommandRequest, DiscoverBooksCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::import_book_cmd::{ImportBookCommand, ImportBookCommandRequest, ImportBookCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::toggle_book_cmd::{ToggleBookCommand, ToggleBookCommandRequest, ToggleBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, AppState, ServerError};

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    // the path owns the identity, not the body
    req.book_id = book_id;
    let res = UpdateBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn toggle_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ToggleBookCommandResponse>, ServerError> {
    let req = ToggleBookCommandRequest { book_id };
    let res = ToggleBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn discover_books(
    State(state): State<AppState>,
    Query(req): Query<DiscoverBooksCommandRequest>) -> Result<Json<DiscoverBooksCommandResponse>, ServerError> {
    let res = DiscoverBooksCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn import_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ImportBookCommandResponse>, ServerError> {
    let req: ImportBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ImportBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}
