use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StorageError};
use crate::models::{NewWorkout, Workout};
use crate::store::WorkoutStore;

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: Vec<Workout>,
}

/// Keeps workouts in process memory. Rows are kept in insertion order and
/// ids are never handed out twice, matching a serial primary key.
#[derive(Debug)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Workout>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Workout>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|w| w.id == id).cloned())
    }

    async fn create(&self, workout: &NewWorkout) -> Result<i32> {
        let mut table = self.table.write().await;
        let id = i32::try_from(table.next_id).map_err(|_| {
            StorageError::ConstraintViolation("workout ids are exhausted".to_string())
        })?;
        table.next_id += 1;
        table.rows.push(workout.clone().into_workout(id));
        Ok(id)
    }

    async fn update(&self, workout: &Workout) -> Result<u64> {
        let mut table = self.table.write().await;
        match table.rows.iter_mut().find(|w| w.id == workout.id) {
            Some(row) => {
                *row = workout.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|w| w.id != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn reset(&self) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.clear();
        table.next_id = 1;
        Ok(())
    }
}
