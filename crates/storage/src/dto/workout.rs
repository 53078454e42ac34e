use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::input;
use crate::models::{NewWorkout, Workout};

/// Request payload for logging a new workout
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[serde(default, deserialize_with = "input::optional_text")]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "input::optional_int")]
    pub reps: Option<i32>,

    #[serde(default, deserialize_with = "input::optional_int")]
    pub weight: Option<i32>,

    #[serde(default, deserialize_with = "input::optional_flag")]
    pub lbs: Option<bool>,

    #[serde(default, deserialize_with = "input::optional_date")]
    pub date: Option<NaiveDate>,
}

impl CreateWorkoutRequest {
    /// Returns `None` when no name was supplied.
    pub fn into_new_workout(self) -> Option<NewWorkout> {
        let name = self.name?;
        Some(NewWorkout {
            name,
            reps: self.reps,
            weight: self.weight,
            lbs: self.lbs,
            date: self.date,
        })
    }
}

/// Request payload for editing a workout in place.
///
/// Absent fields keep their stored value. Explicit `0` and `false` are
/// treated as real values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutRequest {
    #[serde(deserialize_with = "input::record_id")]
    pub id: i32,

    #[serde(default, deserialize_with = "input::optional_text")]
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "input::optional_int")]
    pub reps: Option<i32>,

    #[serde(default, deserialize_with = "input::optional_int")]
    pub weight: Option<i32>,

    #[serde(default, deserialize_with = "input::optional_flag")]
    pub lbs: Option<bool>,

    #[serde(default, deserialize_with = "input::optional_date")]
    pub date: Option<NaiveDate>,
}

impl UpdateWorkoutRequest {
    pub fn merge_into(&self, existing: &Workout) -> Workout {
        Workout {
            id: existing.id,
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            reps: self.reps.or(existing.reps),
            weight: self.weight.or(existing.weight),
            lbs: self.lbs.or(existing.lbs),
            date: self.date.or(existing.date),
        }
    }
}

/// Request payload for removing a workout
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteWorkoutRequest {
    #[serde(deserialize_with = "input::record_id")]
    pub id: i32,
}

/// Workouts encoded as a JSON array inside a string, which is what the
/// page script parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TableDataResponse {
    #[serde(rename = "tableData")]
    pub table_data: String,
}

impl TableDataResponse {
    pub fn from_workouts(workouts: &[Workout]) -> serde_json::Result<Self> {
        Ok(Self {
            table_data: serde_json::to_string(workouts)?,
        })
    }

    pub fn workouts(&self) -> serde_json::Result<Vec<Workout>> {
        serde_json::from_str(&self.table_data)
    }
}

/// Shown next to the form when a workout is submitted without a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessageResponse {
    #[serde(rename = "errMsg")]
    pub err_msg: String,
}

/// Either the created row or the inline error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateWorkoutResponse {
    Created(TableDataResponse),
    Rejected(ErrorMessageResponse),
}
