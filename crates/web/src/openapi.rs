use utoipa::OpenApi;

use crate::features::workouts::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_workouts,
        handlers::create_workout,
        handlers::update_workout,
        handlers::delete_workout,
    ),
    components(
        schemas(
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::workout::DeleteWorkoutRequest,
            storage::dto::workout::TableDataResponse,
            storage::dto::workout::ErrorMessageResponse,
            storage::dto::workout::CreateWorkoutResponse,
            storage::models::Workout,
        )
    ),
    tags(
        (name = "workouts", description = "Workout log endpoints used by the page script"),
    )
)]
pub struct ApiDoc;
