use async_trait::async_trait;

use crate::Database;
use crate::error::Result;
use crate::models::{NewWorkout, Workout};
use crate::repository::WorkoutRepository;

/// Access to the workouts table.
///
/// Every method is a single statement against the backing store; callers
/// compose them without holding locks in between.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Workout>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Workout>>;

    /// Returns the freshly assigned id.
    async fn create(&self, workout: &NewWorkout) -> Result<i32>;

    /// Returns the number of rows written, zero when the id is unknown.
    async fn update(&self, workout: &Workout) -> Result<u64>;

    /// Returns the number of rows removed, zero when the id is unknown.
    async fn delete(&self, id: i32) -> Result<u64>;

    /// Drops every row and restarts id assignment.
    async fn reset(&self) -> Result<()>;
}

#[async_trait]
impl WorkoutStore for Database {
    async fn list(&self) -> Result<Vec<Workout>> {
        WorkoutRepository::new(self.pool()).list().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Workout>> {
        WorkoutRepository::new(self.pool()).find_by_id(id).await
    }

    async fn create(&self, workout: &NewWorkout) -> Result<i32> {
        WorkoutRepository::new(self.pool()).create(workout).await
    }

    async fn update(&self, workout: &Workout) -> Result<u64> {
        WorkoutRepository::new(self.pool()).update(workout).await
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        WorkoutRepository::new(self.pool()).delete(id).await
    }

    async fn reset(&self) -> Result<()> {
        WorkoutRepository::new(self.pool()).reset().await
    }
}
