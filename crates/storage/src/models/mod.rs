pub mod workout;

pub use workout::{NewWorkout, WeightUnit, Workout};
