//! Dispatch use cases: look entities up and run them through the rule engines

use dispatch_domain::model::{CostRates, Driver, Route, RuleSet, TripParameters, Truck};
use dispatch_domain::repository::FleetRepository;
use dispatch_domain::service::fleet_query::{self, FleetQuery, Page};
use dispatch_domain::service::{
    check_assignments, AssignmentCheckResult, AssignmentValidator, CostBreakdown, PayCalculator,
    Violation,
};
use dispatch_types::{FleetError, LicenseLevel, Result, TruckClass};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;

/// Cost breakdown for a fleet route driven by a fleet driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripQuote {
    pub route_id: String,
    pub route_name: String,
    pub driver_id: String,
    pub driver_name: String,
    pub params: TripParameters,
    pub breakdown: CostBreakdown,
}

pub struct DispatchService<R: FleetRepository> {
    repo: R,
    validator: AssignmentValidator,
    calculator: PayCalculator,
}

impl<R: FleetRepository> DispatchService<R> {
    pub fn new(repo: R, rules: RuleSet, rates: CostRates) -> Self {
        Self {
            repo,
            validator: AssignmentValidator::new(rules),
            calculator: PayCalculator::new(rates),
        }
    }

    pub fn from_config(repo: R, config: &Config) -> Self {
        Self::new(repo, config.rule_set(), config.cost_rates())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validate by id. Omitted or unknown ids count as absent entities.
    pub fn validate_by_ids(
        &self,
        driver_id: Option<&str>,
        truck_id: Option<&str>,
        route_id: Option<&str>,
    ) -> Result<Vec<Violation>> {
        let driver = self.lookup(driver_id, "driver", |id| self.repo.find_driver(id))?;
        let truck = self.lookup(truck_id, "truck", |id| self.repo.find_truck(id))?;
        let route = self.lookup(route_id, "route", |id| self.repo.find_route(id))?;
        Ok(self
            .validator
            .validate(driver.as_ref(), truck.as_ref(), route.as_ref()))
    }

    pub fn quote(&self, params: &TripParameters) -> Result<CostBreakdown> {
        Ok(self.calculator.calculate(params)?)
    }

    /// Quote a fleet route using the driver's experience
    pub fn quote_route(&self, route_id: &str, driver_id: &str, hourly_rate: f64) -> Result<TripQuote> {
        let route: Route = self
            .repo
            .find_route(route_id)?
            .ok_or_else(|| unknown("route", route_id))?;
        let driver: Driver = self
            .repo
            .find_driver(driver_id)?
            .ok_or_else(|| unknown("driver", driver_id))?;

        let params = TripParameters::for_route(&route, &driver, hourly_rate);
        let breakdown = self.quote(&params)?;
        debug!(route = route_id, driver = driver_id, "quoted route");

        Ok(TripQuote {
            route_id: route.id.clone(),
            route_name: route.display_name().to_string(),
            driver_id: driver.id,
            driver_name: driver.name,
            params,
            breakdown,
        })
    }

    /// Validate every planned assignment in the fleet
    pub fn check_planned(&self) -> Result<Vec<AssignmentCheckResult>> {
        let fleet = self.repo.snapshot()?;
        let results = check_assignments(&fleet.assignments, &fleet, &self.validator);
        debug!(
            checked = results.len(),
            invalid = results.iter().filter(|r| !r.is_valid).count(),
            "checked planned assignments"
        );
        Ok(results)
    }

    pub fn list_drivers(&self, query: &FleetQuery, min_license: Option<LicenseLevel>) -> Result<Page<Driver>> {
        Ok(fleet_query::query_drivers(&self.repo.all_drivers()?, query, min_license))
    }

    pub fn list_trucks(&self, query: &FleetQuery, class: Option<TruckClass>) -> Result<Page<Truck>> {
        Ok(fleet_query::query_trucks(&self.repo.all_trucks()?, query, class))
    }

    pub fn list_routes(&self, query: &FleetQuery) -> Result<Page<Route>> {
        Ok(fleet_query::query(&self.repo.all_routes()?, query))
    }

    fn lookup<T>(
        &self,
        id: Option<&str>,
        kind: &str,
        find: impl Fn(&str) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let found = find(id)?;
        if found.is_none() {
            warn!(kind, id, "unknown id, treating as absent");
        }
        Ok(found)
    }
}

fn unknown(kind: &'static str, id: &str) -> FleetError {
    FleetError::UnknownEntity {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_domain::model::Fleet;
    use dispatch_types::{Error, RouteType};

    fn service() -> DispatchService<Fleet> {
        let fleet = Fleet {
            drivers: vec![
                Driver::new("d-1", "Maria Lopez", LicenseLevel::ClassA, 5),
                Driver::new("d-2", "Lee Park", LicenseLevel::ClassC, 1),
            ],
            trucks: vec![Truck::new("T-1", TruckClass::Heavy)],
            routes: vec![Route::new("r-1", RouteType::Standard, 500.0).with_name("Depot loop")],
            assignments: vec![],
        };
        DispatchService::new(fleet, RuleSet::default(), CostRates::default())
    }

    #[test]
    fn test_validate_by_ids() {
        let svc = service();
        assert!(svc
            .validate_by_ids(Some("d-1"), Some("T-1"), Some("r-1"))
            .unwrap()
            .is_empty());
        let violations = svc.validate_by_ids(Some("d-2"), Some("T-1"), Some("r-1")).unwrap();
        assert_eq!(violations[0].kind(), "license_below_truck_class");
    }

    #[test]
    fn test_unknown_id_is_absent() {
        let svc = service();
        let violations = svc.validate_by_ids(Some("d-1"), Some("T-9"), Some("r-1")).unwrap();
        assert_eq!(violations, vec![Violation::TruckRequired]);
        let violations = svc.validate_by_ids(None, None, None).unwrap();
        assert_eq!(violations, vec![Violation::DriverRequired]);
    }

    #[test]
    fn test_quote_route() {
        let quote = service().quote_route("r-1", "d-1", 28.0).unwrap();
        assert_eq!(quote.route_name, "Depot loop");
        assert_eq!(quote.driver_name, "Maria Lopez");
        assert!((quote.breakdown.total_cost - 591.15).abs() < 0.01);
    }

    #[test]
    fn test_quote_unknown_route() {
        let err = service().quote_route("r-404", "d-1", 28.0).unwrap_err();
        assert!(matches!(
            err,
            Error::Fleet(FleetError::UnknownEntity { kind: "route", .. })
        ));
    }

    #[test]
    fn test_quote_rejects_negative_rate() {
        let err = service().quote_route("r-1", "d-1", -5.0).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_list_drivers() {
        let page = service()
            .list_drivers(&FleetQuery::default(), Some(LicenseLevel::ClassB))
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "d-1");
    }
}
