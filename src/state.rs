use crate::config::PlannerSettings;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub planner: PlannerSettings,
    pub metrics: Metrics,
    pub cors_allowed_origins: Vec<String>,
}

impl AppState {
    pub fn new(planner: PlannerSettings) -> Self {
        Self {
            planner,
            metrics: Metrics::new(),
            cors_allowed_origins: Vec::new(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_allowed_origins = origins;
        self
    }
}
