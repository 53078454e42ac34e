use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One logged set of an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i32,
    pub name: String,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    /// `true` when `weight` is in pounds, `false` for kilograms.
    pub lbs: Option<bool>,
    pub date: Option<NaiveDate>,
}

impl Workout {
    pub fn unit(&self) -> WeightUnit {
        WeightUnit::from_lbs_flag(self.lbs)
    }
}

/// A workout that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub name: String,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub lbs: Option<bool>,
    pub date: Option<NaiveDate>,
}

impl NewWorkout {
    pub fn into_workout(self, id: i32) -> Workout {
        Workout {
            id,
            name: self.name,
            reps: self.reps,
            weight: self.weight,
            lbs: self.lbs,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Pounds,
    Kilograms,
}

impl WeightUnit {
    /// An unset flag reads as kilograms.
    pub fn from_lbs_flag(lbs: Option<bool>) -> Self {
        if lbs.unwrap_or(false) {
            Self::Pounds
        } else {
            Self::Kilograms
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pounds => "lbs",
            Self::Kilograms => "kgs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> Workout {
        Workout {
            id: 1,
            name: "Squat".to_string(),
            reps: Some(5),
            weight: Some(200),
            lbs: Some(true),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }

    #[test]
    fn test_unit_from_flag() {
        assert_eq!(WeightUnit::from_lbs_flag(Some(true)), WeightUnit::Pounds);
        assert_eq!(WeightUnit::from_lbs_flag(Some(false)), WeightUnit::Kilograms);
        assert_eq!(WeightUnit::from_lbs_flag(None), WeightUnit::Kilograms);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(squat().unit().label(), "lbs");
        let mut kilos = squat();
        kilos.lbs = Some(false);
        assert_eq!(kilos.unit().label(), "kgs");
    }

    #[test]
    fn test_serializes_date_as_iso() {
        let json = serde_json::to_value(squat()).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["lbs"], true);
        assert_eq!(json["reps"], 5);
    }

    #[test]
    fn test_new_workout_takes_assigned_id() {
        let new = NewWorkout {
            name: "Row".to_string(),
            reps: None,
            weight: Some(100),
            lbs: None,
            date: None,
        };
        let stored = new.into_workout(7);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.name, "Row");
        assert_eq!(stored.weight, Some(100));
    }
}
