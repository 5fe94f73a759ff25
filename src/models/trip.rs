use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::models::duty::Segment;
use crate::models::log::LogSummary;
use crate::models::route::RouteLeg;

/// Response body of a successful plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripPlan {
    pub route_legs: Vec<RouteLeg>,
    pub segments: Vec<Segment>,
    pub summary: LogSummary,
}

/// The three named stops of a trip, in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripStops {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
}

/// Record shape for a planned trip. Plans are not persisted; this is what a
/// store would keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub start_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub current_cycle_hours: f64,
    pub route_summary: Option<serde_json::Value>,
    pub rosters: Option<serde_json::Value>,
}

impl Trip {
    pub fn from_plan(stops: &TripStops, current_cycle_hours: f64, plan: &TripPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            created: Utc::now(),
            current_location: stops.current_location.clone(),
            pickup_location: stops.pickup_location.clone(),
            dropoff_location: stops.dropoff_location.clone(),
            start_time: plan.summary.start,
            current_cycle_hours,
            route_summary: Some(json!({
                "route_legs": plan.route_legs,
                "summary": plan.summary,
            })),
            rosters: Some(json!(plan.segments)),
        }
    }
}
