use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::dto::workout::{
    CreateWorkoutRequest, CreateWorkoutResponse, DeleteWorkoutRequest, ErrorMessageResponse,
    TableDataResponse, UpdateWorkoutRequest,
};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services::{self, CreateOutcome};

#[utoipa::path(
    get,
    path = "/fill",
    responses(
        (status = 200, description = "Every workout, JSON-encoded in `tableData`", body = TableDataResponse)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(state): State<AppState>) -> Result<Response, WebError> {
    let workouts = services::list_workouts(state.store()).await?;

    Ok(Json(TableDataResponse::from_workouts(&workouts)?).into_response())
}

#[utoipa::path(
    post,
    path = "/",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 200, description = "The created workout, or `errMsg` when the name is missing", body = CreateWorkoutResponse),
        (status = 400, description = "Malformed or invalid input")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkoutRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let response = match services::create_workout(state.store(), req).await? {
        CreateOutcome::Created(workouts) => {
            CreateWorkoutResponse::Created(TableDataResponse::from_workouts(&workouts)?)
        }
        CreateOutcome::MissingName => CreateWorkoutResponse::Rejected(ErrorMessageResponse {
            err_msg: services::MISSING_NAME_MESSAGE.to_string(),
        }),
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/update",
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "The workout after the update; empty when the id is unknown", body = TableDataResponse),
        (status = 400, description = "Malformed or invalid input")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(state): State<AppState>,
    payload: Result<Json<UpdateWorkoutRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(update_req) = payload?;
    update_req.validate()?;

    let workouts = services::update_workout(state.store(), &update_req).await?;

    Ok(Json(TableDataResponse::from_workouts(&workouts)?).into_response())
}

#[utoipa::path(
    post,
    path = "/del",
    request_body = DeleteWorkoutRequest,
    responses(
        (status = 200, description = "Workout deleted; `tableData` is normally empty", body = TableDataResponse),
        (status = 400, description = "Malformed id")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    payload: Result<Json<DeleteWorkoutRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;

    let workouts = services::delete_workout(state.store(), req.id).await?;

    Ok(Json(TableDataResponse::from_workouts(&workouts)?).into_response())
}
