use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::PlannerSettings;
use crate::engine::clock::StartTime;
use crate::engine::route::{plan_route_legs, total_miles};
use crate::engine::timeline::generate_daily_log;
use crate::error::AppError;
use crate::models::trip::{TripPlan, TripStops};
use crate::observability::metrics::{OUTCOME_REJECTED, OUTCOME_SUCCESS};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/plan-trip/", post(plan_trip))
        .route("/api/plan-trip", post(plan_trip))
}

#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub current_location: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    /// Anything that is not a parsable timestamp string means "now".
    pub start_time: Option<Value>,
    pub current_cycle_hours: Option<CycleHours>,
}

/// Clients send cycle hours either as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CycleHours {
    Number(f64),
    Text(String),
}

struct ValidatedTrip {
    stops: TripStops,
    start: StartTime,
    current_cycle_hours: f64,
}

impl PlanTripRequest {
    fn validate(self) -> Result<ValidatedTrip, AppError> {
        let stops = TripStops {
            current_location: required("current_location", self.current_location)?,
            pickup_location: required("pickup_location", self.pickup_location)?,
            dropoff_location: required("dropoff_location", self.dropoff_location)?,
        };

        let current_cycle_hours = match self.current_cycle_hours {
            None => 0.0,
            Some(CycleHours::Number(hours)) => hours,
            Some(CycleHours::Text(raw)) => raw.trim().parse::<f64>().map_err(|_| {
                AppError::Validation(format!("current_cycle_hours must be numeric, got {raw:?}"))
            })?,
        };
        if !current_cycle_hours.is_finite() {
            return Err(AppError::Validation(
                "current_cycle_hours must be a finite number".to_string(),
            ));
        }

        let start = match self
            .start_time
            .as_ref()
            .and_then(Value::as_str)
            .and_then(StartTime::parse)
        {
            Some(start) => start,
            None => {
                debug!(start_time = ?self.start_time, "start_time missing or unparsable, using current time");
                StartTime::now()
            }
        };

        Ok(ValidatedTrip {
            stops,
            start,
            current_cycle_hours,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

async fn plan_trip(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<Json<TripPlan>, AppError> {
    let started = Instant::now();
    let result = build_plan(&state.planner, payload);
    let elapsed = started.elapsed().as_secs_f64();

    match &result {
        Ok(_) => state.metrics.observe_plan(OUTCOME_SUCCESS, elapsed),
        Err(err) => {
            warn!(error = %err, "trip plan rejected");
            state.metrics.observe_plan(OUTCOME_REJECTED, elapsed);
        }
    }

    result.map(Json)
}

fn build_plan(
    settings: &PlannerSettings,
    payload: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<TripPlan, AppError> {
    let Json(request) = payload?;
    let trip = request.validate()?;

    let route_legs = plan_route_legs(&trip.stops);
    let log = generate_daily_log(&trip.stops, trip.start, total_miles(&route_legs), settings)?;

    info!(
        current = %trip.stops.current_location,
        pickup = %trip.stops.pickup_location,
        dropoff = %trip.stops.dropoff_location,
        start = %log.summary.start,
        cycle_hours = trip.current_cycle_hours,
        total_hours = log.summary.total_hours,
        "trip planned"
    );

    Ok(TripPlan {
        route_legs,
        segments: log.segments,
        summary: log.summary,
    })
}
