use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{create_workout, delete_workout, list_workouts, update_workout};
use super::views::{edit_row, index, init_table, table_row, table_rows};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create_workout))
        .route("/fill", get(list_workouts))
        .route("/update", post(update_workout))
        .route("/del", post(delete_workout))
        .route("/rows", get(table_rows))
        .route("/rows/:id", get(table_row))
        .route("/rows/:id/edit", get(edit_row))
        .route("/init-table", get(init_table))
}
