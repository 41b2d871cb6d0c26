//! Tunable business rules for validation and costing

use dispatch_types::{RouteType, SpeedModel};
use serde::{Deserialize, Serialize};

pub const FUEL_PRICE_PER_GALLON: f64 = 3.85;
pub const AVERAGE_MPG: f64 = 6.5;
pub const OTHER_COST_RATE: f64 = 0.10;
pub const PROFIT_MARGIN: f64 = 1.20;
pub const AVERAGE_SPEED_MPH: f64 = 60.0;
/// Speed assumed by the whole-hour estimate
pub const WHOLE_HOUR_SPEED_MPH: f64 = 50.0;

pub const OVERSIZED_MIN_YEARS: u32 = 3;
pub const DEMO_HAZMAT_MIN_YEARS: u32 = 2;
pub const DEMO_LONG_HAUL_MIN_YEARS: u32 = 1;

/// Route-type requirements checked by the assignment validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Hazmat routes need exactly a Class A license
    pub hazmat_requires_class_a: bool,
    pub hazmat_min_years: Option<u32>,
    pub oversized_min_years: Option<u32>,
    pub long_haul_min_years: Option<u32>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            hazmat_requires_class_a: true,
            hazmat_min_years: None,
            oversized_min_years: Some(OVERSIZED_MIN_YEARS),
            long_haul_min_years: None,
        }
    }
}

impl RuleSet {
    /// Default rules plus the experience thresholds used by the dispatch board
    pub fn with_demo_thresholds() -> Self {
        Self {
            hazmat_min_years: Some(DEMO_HAZMAT_MIN_YEARS),
            long_haul_min_years: Some(DEMO_LONG_HAUL_MIN_YEARS),
            ..Self::default()
        }
    }

    pub fn min_years_for(&self, route_type: RouteType) -> Option<u32> {
        match route_type {
            RouteType::Standard => None,
            RouteType::Hazmat => self.hazmat_min_years,
            RouteType::Oversized => self.oversized_min_years,
            RouteType::LongHaul => self.long_haul_min_years,
        }
    }
}

/// Prices and rates used by the pay and cost calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRates {
    pub fuel_price_per_gallon: f64,
    pub average_mpg: f64,
    /// Tolls, wear and insurance per mile
    pub other_cost_rate: f64,
    /// Multiplier applied to total cost to get minimum revenue
    pub profit_margin: f64,
    pub average_speed_mph: f64,
    pub speed_model: SpeedModel,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            fuel_price_per_gallon: FUEL_PRICE_PER_GALLON,
            average_mpg: AVERAGE_MPG,
            other_cost_rate: OTHER_COST_RATE,
            profit_margin: PROFIT_MARGIN,
            average_speed_mph: AVERAGE_SPEED_MPH,
            speed_model: SpeedModel::Continuous,
        }
    }
}

impl CostRates {
    /// Default rates with the whole-hour drive time estimate at 50 mph
    pub fn whole_hours() -> Self {
        Self {
            average_speed_mph: WHOLE_HOUR_SPEED_MPH,
            speed_model: SpeedModel::WholeHours,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert!(rules.hazmat_requires_class_a);
        assert_eq!(rules.min_years_for(RouteType::Oversized), Some(3));
        assert_eq!(rules.min_years_for(RouteType::Hazmat), None);
        assert_eq!(rules.min_years_for(RouteType::LongHaul), None);
        assert_eq!(rules.min_years_for(RouteType::Standard), None);
    }

    #[test]
    fn test_demo_thresholds_keep_defaults() {
        let rules = RuleSet::with_demo_thresholds();
        assert!(rules.hazmat_requires_class_a);
        assert_eq!(rules.min_years_for(RouteType::Hazmat), Some(2));
        assert_eq!(rules.min_years_for(RouteType::LongHaul), Some(1));
        assert_eq!(rules.min_years_for(RouteType::Oversized), Some(3));
    }

    #[test]
    fn test_whole_hour_rates() {
        let rates = CostRates::whole_hours();
        assert_eq!(rates.speed_model, SpeedModel::WholeHours);
        assert_eq!(rates.average_speed_mph, 50.0);
        assert_eq!(rates.fuel_price_per_gallon, 3.85);
    }
}
