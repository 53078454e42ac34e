use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::client::{RowEditor, RowView, TableView, page};
use crate::error::WebError;
use crate::state::AppState;

use super::services;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let workouts = services::list_workouts(state.store()).await?;

    Ok(Html(page::render_page(
        &TableView::from_workouts(&workouts),
        None,
    )))
}

/// Every row, for a full rebuild of the table body
pub async fn table_rows(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let workouts = services::list_workouts(state.store()).await?;

    Ok(Html(TableView::from_workouts(&workouts).to_html()))
}

/// A single row, appended after a create
pub async fn table_row(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let workout = services::find_workout(state.store(), id)
        .await?
        .ok_or(WebError::NotFound)?;

    let mut table = TableView::new();
    table.append(&workout);
    Ok(Html(table.to_html()))
}

/// A row switched into its editing inputs
pub async fn edit_row(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let workout = services::find_workout(state.store(), id)
        .await?
        .ok_or(WebError::NotFound)?;

    let mut editor = RowEditor::new(RowView::from_workout(&workout));
    editor
        .begin_edit()
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;

    Ok(Html(editor.to_html()))
}

/// Drops and recreates the table. Looks like an unknown page unless enabled.
pub async fn init_table(State(state): State<AppState>) -> Result<Response, WebError> {
    if !state.allow_table_reset() {
        return Ok(not_found().await.into_response());
    }

    services::reset_table(state.store()).await?;

    Ok(Html(page::render_page(&TableView::new(), Some("Table reset"))).into_response())
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(page::render_not_found()))
}
