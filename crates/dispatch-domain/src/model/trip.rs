//! Calculator input

use dispatch_types::RouteType;
use serde::{Deserialize, Serialize};

use super::{Driver, Route};

/// Inputs of a single pay and cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    pub distance_miles: f64,
    /// Driver pay per hour of driving
    pub hourly_rate: f64,
    pub years_experience: f64,
    pub route_type: RouteType,
}

impl TripParameters {
    pub fn new(distance_miles: f64, hourly_rate: f64, years_experience: f64, route_type: RouteType) -> Self {
        Self {
            distance_miles,
            hourly_rate,
            years_experience,
            route_type,
        }
    }

    /// Parameters for driving `route` with `driver` at `hourly_rate`
    pub fn for_route(route: &Route, driver: &Driver, hourly_rate: f64) -> Self {
        Self::new(
            route.distance_miles,
            hourly_rate,
            f64::from(driver.years_experience),
            route.route_type,
        )
    }
}
