use crate::models::route::RouteLeg;
use crate::models::trip::TripStops;

const TO_PICKUP_MILES: u32 = 120;
const TO_DROPOFF_MILES: u32 = 350;

/// Fixed two-leg route. Known limitation: mileage is a placeholder, no
/// geocoder or routing engine is consulted.
pub fn plan_route_legs(stops: &TripStops) -> Vec<RouteLeg> {
    vec![
        RouteLeg {
            from: stops.current_location.clone(),
            to: stops.pickup_location.clone(),
            miles: TO_PICKUP_MILES,
        },
        RouteLeg {
            from: stops.pickup_location.clone(),
            to: stops.dropoff_location.clone(),
            miles: TO_DROPOFF_MILES,
        },
    ]
}

pub fn total_miles(legs: &[RouteLeg]) -> f64 {
    legs.iter().map(|leg| f64::from(leg.miles)).sum()
}

#[cfg(test)]
mod tests {
    use super::{plan_route_legs, total_miles};
    use crate::models::trip::TripStops;

    fn stops(current: &str, pickup: &str, dropoff: &str) -> TripStops {
        TripStops {
            current_location: current.to_string(),
            pickup_location: pickup.to_string(),
            dropoff_location: dropoff.to_string(),
        }
    }

    #[test]
    fn legs_chain_through_pickup() {
        let legs = plan_route_legs(&stops("Dallas, TX", "Austin, TX", "Houston, TX"));

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].from, "Dallas, TX");
        assert_eq!(legs[0].to, "Austin, TX");
        assert_eq!(legs[0].miles, 120);
        assert_eq!(legs[1].from, "Austin, TX");
        assert_eq!(legs[1].to, "Houston, TX");
        assert_eq!(legs[1].miles, 350);
    }

    #[test]
    fn distance_ignores_locations() {
        let short = plan_route_legs(&stops("A", "A", "A"));
        let long = plan_route_legs(&stops("Seattle, WA", "Miami, FL", "Anchorage, AK"));

        assert_eq!(total_miles(&short), 470.0);
        assert_eq!(total_miles(&long), 470.0);
    }

    #[test]
    fn empty_route_has_no_distance() {
        assert_eq!(total_miles(&[]), 0.0);
    }
}
