use sqlx::PgPool;

use crate::error::Result;
use crate::models::{NewWorkout, Workout};

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all workouts, oldest first
    pub async fn list(&self) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, reps, weight, lbs, date
            FROM workouts
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Find workouts by ID. Returns zero or one rows.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, reps, weight, lbs, date
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(workout)
    }

    /// Insert a workout and return the id the database assigned
    pub async fn create(&self, workout: &NewWorkout) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO workouts (name, reps, weight, lbs, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&workout.name)
        .bind(workout.reps)
        .bind(workout.weight)
        .bind(workout.lbs)
        .bind(workout.date)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite every column of an existing workout
    pub async fn update(&self, workout: &Workout) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE workouts
            SET name = $2,
                reps = $3,
                weight = $4,
                lbs = $5,
                date = $6
            WHERE id = $1
            "#,
        )
        .bind(workout.id)
        .bind(&workout.name)
        .bind(workout.reps)
        .bind(workout.weight)
        .bind(workout.lbs)
        .bind(workout.date)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a workout by ID
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Drop and recreate the table. Every row is lost.
    pub async fn reset(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DROP TABLE IF EXISTS workouts")
            .execute(&mut *tx)
            .await?;
        sqlx::query(include_str!(
            "../../migrations/20240101000000_create_workouts.sql"
        ))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
