use storage::models::Workout;

use super::{date, escape};

/// The display text of one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: i32,
    pub name: String,
    pub reps: String,
    pub weight: String,
    /// `lbs` or `kgs`
    pub unit: String,
    /// `MM-DD-YYYY`, or empty when no date was logged
    pub date: String,
}

impl RowView {
    pub fn from_workout(workout: &Workout) -> Self {
        let stored_date = workout
            .date
            .map(|d| d.format(storage::dto::input::DATE_FORMAT).to_string())
            .unwrap_or_default();

        Self {
            id: workout.id,
            name: workout.name.clone(),
            reps: workout.reps.map(|r| r.to_string()).unwrap_or_default(),
            weight: workout.weight.map(|w| w.to_string()).unwrap_or_default(),
            unit: workout.unit().label().to_string(),
            date: date::to_display(&stored_date),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<tr id="{id}" data-state="viewing">"#,
                "<td>{name}</td><td>{reps}</td><td>{weight}</td><td>{unit}</td><td>{date}</td>",
                r#"<td><input type="submit" class="edit" value="Edit"></td>"#,
                r#"<td><input type="submit" class="delete" value="Delete"></td>"#,
                "</tr>"
            ),
            id = self.id,
            name = escape(&self.name),
            reps = escape(&self.reps),
            weight = escape(&self.weight),
            unit = escape(&self.unit),
            date = escape(&self.date),
        )
    }
}

/// The rows currently painted in the workouts table body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<RowView>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_workouts(workouts: &[Workout]) -> Self {
        let mut table = Self::new();
        table.rebuild(workouts);
        table
    }

    /// Clears every row, then paints `workouts` in list order.
    pub fn rebuild(&mut self, workouts: &[Workout]) {
        self.rows.clear();
        for workout in workouts {
            self.append(workout);
        }
    }

    /// Adds one row at the bottom without touching the others.
    pub fn append(&mut self, workout: &Workout) {
        self.rows.push(RowView::from_workout(workout));
    }

    pub fn to_html(&self) -> String {
        self.rows.iter().map(RowView::to_html).collect()
    }
}
