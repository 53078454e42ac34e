use storage::{
    WorkoutStore,
    dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest},
    error::Result,
    models::Workout,
};

pub const MISSING_NAME_MESSAGE: &str = "You must enter a name for the workout.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The stored row, read back by its new id
    Created(Vec<Workout>),
    MissingName,
}

/// List all workouts
pub async fn list_workouts(store: &dyn WorkoutStore) -> Result<Vec<Workout>> {
    store.list().await
}

/// Find a single workout
pub async fn find_workout(store: &dyn WorkoutStore, id: i32) -> Result<Option<Workout>> {
    store.find_by_id(id).await
}

/// Create a workout unless the name is missing
pub async fn create_workout(
    store: &dyn WorkoutStore,
    request: CreateWorkoutRequest,
) -> Result<CreateOutcome> {
    let Some(new_workout) = request.into_new_workout() else {
        return Ok(CreateOutcome::MissingName);
    };

    let id = store.create(&new_workout).await?;
    tracing::info!(id, name = %new_workout.name, "Workout created");

    let created = store.find_by_id(id).await?.into_iter().collect();
    Ok(CreateOutcome::Created(created))
}

/// Merge the supplied fields over the stored workout, then read it back.
/// An unknown id is skipped and yields an empty list.
pub async fn update_workout(
    store: &dyn WorkoutStore,
    request: &UpdateWorkoutRequest,
) -> Result<Vec<Workout>> {
    match store.find_by_id(request.id).await? {
        Some(existing) => {
            let merged = request.merge_into(&existing);
            store.update(&merged).await?;
            tracing::info!(id = request.id, "Workout updated");
        }
        None => tracing::debug!(id = request.id, "Skipping update of unknown workout"),
    }

    Ok(store.find_by_id(request.id).await?.into_iter().collect())
}

/// Delete a workout. Deleting an unknown id is not an error.
pub async fn delete_workout(store: &dyn WorkoutStore, id: i32) -> Result<Vec<Workout>> {
    let removed = store.delete(id).await?;
    tracing::info!(id, removed, "Workout deleted");

    Ok(store.find_by_id(id).await?.into_iter().collect())
}

/// Drop and recreate the workouts table
pub async fn reset_table(store: &dyn WorkoutStore) -> Result<()> {
    store.reset().await?;
    tracing::warn!("Workouts table reset");
    Ok(())
}
