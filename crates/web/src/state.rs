use std::sync::Arc;

use storage::WorkoutStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn WorkoutStore>,
    allow_table_reset: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self {
            store,
            allow_table_reset: false,
        }
    }

    /// Exposes `GET /init-table`, which wipes every workout.
    pub fn with_table_reset(mut self, allowed: bool) -> Self {
        self.allow_table_reset = allowed;
        self
    }

    pub fn store(&self) -> &dyn WorkoutStore {
        self.store.as_ref()
    }

    pub fn allow_table_reset(&self) -> bool {
        self.allow_table_reset
    }
}
