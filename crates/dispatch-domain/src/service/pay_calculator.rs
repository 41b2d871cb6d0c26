//! Driver pay and trip cost calculation
//!
//! # Formula
//! ```text
//! drive_time       = distance / speed           (ceil for whole hours)
//! base_pay         = hourly_rate x drive_time
//! experience_bonus = base_pay x min(years x 1%, 25%)
//! total_driver_pay = base_pay + experience_bonus + route_bonus
//! total_cost       = total_driver_pay + distance / mpg x fuel_price + distance x other_rate
//! minimum_revenue  = total_cost x profit_margin
//! ```

use dispatch_types::{InputError, RouteType, SpeedModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{CostRates, TripParameters};

pub const EXPERIENCE_BONUS_PER_YEAR: f64 = 0.01;
pub const EXPERIENCE_BONUS_CAP: f64 = 0.25;
pub const HAZMAT_BONUS: f64 = 250.0;
pub const OVERSIZED_BONUS: f64 = 300.0;
pub const LONG_HAUL_BONUS_PER_MILE: f64 = 0.15;

/// Full pay and cost breakdown for one trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub drive_time_hours: f64,
    pub base_pay: f64,
    pub experience_bonus: f64,
    pub route_bonus: f64,
    pub total_driver_pay: f64,
    pub fuel_cost: f64,
    pub other_costs: f64,
    pub total_cost: f64,
    pub minimum_revenue: f64,
    pub profit: f64,
}

/// Calculator bound to a set of rates
#[derive(Debug, Clone, Copy, Default)]
pub struct PayCalculator {
    rates: CostRates,
}

impl PayCalculator {
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    pub fn calculate(&self, params: &TripParameters) -> Result<CostBreakdown, InputError> {
        check_rates(&self.rates)?;
        non_negative("distance_miles", params.distance_miles)?;
        non_negative("hourly_rate", params.hourly_rate)?;
        non_negative("years_experience", params.years_experience)?;

        let rates = &self.rates;
        let distance = params.distance_miles;

        let drive_time_hours = drive_time_hours(distance, rates);
        let base_pay = params.hourly_rate * drive_time_hours;
        let experience_bonus = base_pay * experience_multiplier(params.years_experience) - base_pay;
        let route_bonus = route_bonus(params.route_type, distance);
        let total_driver_pay = base_pay + experience_bonus + route_bonus;

        let fuel_cost = distance / rates.average_mpg * rates.fuel_price_per_gallon;
        let other_costs = distance * rates.other_cost_rate;
        let total_cost = total_driver_pay + fuel_cost + other_costs;
        let minimum_revenue = total_cost * rates.profit_margin;
        let profit = minimum_revenue - total_cost;

        debug!(
            distance,
            route_type = %params.route_type,
            total_cost,
            minimum_revenue,
            "calculated trip cost"
        );

        Ok(CostBreakdown {
            drive_time_hours,
            base_pay,
            experience_bonus,
            route_bonus,
            total_driver_pay,
            fuel_cost,
            other_costs,
            total_cost,
            minimum_revenue,
            profit,
        })
    }
}

/// Calculate with the default rates (60 mph, continuous hours)
pub fn calculate_trip_cost(params: &TripParameters) -> Result<CostBreakdown, InputError> {
    PayCalculator::default().calculate(params)
}

pub fn drive_time_hours(distance_miles: f64, rates: &CostRates) -> f64 {
    let hours = distance_miles / rates.average_speed_mph;
    match rates.speed_model {
        SpeedModel::Continuous => hours,
        SpeedModel::WholeHours => hours.ceil(),
    }
}

/// 1% per year of experience, capped at 25%
pub fn experience_multiplier(years_experience: f64) -> f64 {
    1.0 + (years_experience * EXPERIENCE_BONUS_PER_YEAR).min(EXPERIENCE_BONUS_CAP)
}

pub fn route_bonus(route_type: RouteType, distance_miles: f64) -> f64 {
    match route_type {
        RouteType::Standard => 0.0,
        RouteType::Hazmat => HAZMAT_BONUS,
        RouteType::Oversized => OVERSIZED_BONUS,
        RouteType::LongHaul => distance_miles * LONG_HAUL_BONUS_PER_MILE,
    }
}

fn check_rates(rates: &CostRates) -> Result<(), InputError> {
    positive("average_speed_mph", rates.average_speed_mph)?;
    positive("average_mpg", rates.average_mpg)?;
    non_negative("fuel_price_per_gallon", rates.fuel_price_per_gallon)?;
    non_negative("other_cost_rate", rates.other_cost_rate)?;
    non_negative("profit_margin", rates.profit_margin)?;
    if rates.profit_margin < 1.0 {
        return Err(InputError::MarginBelowCost {
            value: rates.profit_margin,
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(())
}
