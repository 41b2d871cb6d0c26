//! Assignment validation service
//!
//! Checks a driver + truck + route assignment against the license,
//! availability, maintenance and route-type rules. Every applicable rule is
//! evaluated; only a missing entity stops the check early.

use std::fmt;

use dispatch_types::{LicenseLevel, RouteType, TruckClass};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Driver, Route, RuleSet, Truck};

/// A reason an assignment is invalid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    DriverRequired,
    TruckRequired,
    RouteRequired,
    LicenseBelowTruckClass {
        driver: String,
        license: LicenseLevel,
        truck: String,
        truck_class: TruckClass,
        required: LicenseLevel,
    },
    DriverUnavailable {
        driver: String,
    },
    TruckUnavailable {
        truck: String,
    },
    TruckInMaintenance {
        truck: String,
    },
    HazmatRequiresClassA {
        driver: String,
        license: LicenseLevel,
    },
    InsufficientExperience {
        driver: String,
        route_type: RouteType,
        required_years: u32,
        actual_years: u32,
    },
}

impl Violation {
    /// Stable machine-readable code
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::DriverRequired => "driver_required",
            Violation::TruckRequired => "truck_required",
            Violation::RouteRequired => "route_required",
            Violation::LicenseBelowTruckClass { .. } => "license_below_truck_class",
            Violation::DriverUnavailable { .. } => "driver_unavailable",
            Violation::TruckUnavailable { .. } => "truck_unavailable",
            Violation::TruckInMaintenance { .. } => "truck_in_maintenance",
            Violation::HazmatRequiresClassA { .. } => "hazmat_requires_class_a",
            Violation::InsufficientExperience { .. } => "insufficient_experience",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DriverRequired => write!(f, "Driver is required"),
            Violation::TruckRequired => write!(f, "Truck is required"),
            Violation::RouteRequired => write!(f, "Route is required"),
            Violation::LicenseBelowTruckClass {
                driver,
                license,
                truck,
                truck_class,
                required,
            } => write!(
                f,
                "{} holds a {} license but truck {} ({}) requires {}",
                driver, license, truck, truck_class, required
            ),
            Violation::DriverUnavailable { driver } => {
                write!(f, "Driver {} is not available", driver)
            }
            Violation::TruckUnavailable { truck } => write!(f, "Truck {} is not available", truck),
            Violation::TruckInMaintenance { truck } => {
                write!(f, "Truck {} is in maintenance", truck)
            }
            Violation::HazmatRequiresClassA { driver, license } => write!(
                f,
                "Hazmat routes require a Class A license ({} holds {})",
                driver, license
            ),
            Violation::InsufficientExperience {
                driver,
                route_type,
                required_years,
                actual_years,
            } => write!(
                f,
                "{} routes require at least {} years of experience ({} has {})",
                route_type, required_years, driver, actual_years
            ),
        }
    }
}

/// Validator bound to a rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentValidator {
    rules: RuleSet,
}

impl AssignmentValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate an assignment. An empty result means the assignment is valid.
    pub fn validate(
        &self,
        driver: Option<&Driver>,
        truck: Option<&Truck>,
        route: Option<&Route>,
    ) -> Vec<Violation> {
        let Some(driver) = driver else {
            return vec![Violation::DriverRequired];
        };
        let Some(truck) = truck else {
            return vec![Violation::TruckRequired];
        };
        let Some(route) = route else {
            return vec![Violation::RouteRequired];
        };

        let mut violations = Vec::new();

        let required = truck.required_license();
        if driver.license < required {
            violations.push(Violation::LicenseBelowTruckClass {
                driver: driver.name.clone(),
                license: driver.license,
                truck: truck.id.clone(),
                truck_class: truck.class,
                required,
            });
        }

        if !driver.available {
            violations.push(Violation::DriverUnavailable {
                driver: driver.name.clone(),
            });
        }

        if !truck.available {
            violations.push(Violation::TruckUnavailable {
                truck: truck.id.clone(),
            });
        }

        if truck.in_maintenance {
            violations.push(Violation::TruckInMaintenance {
                truck: truck.id.clone(),
            });
        }

        self.check_route_requirements(driver, route, &mut violations);

        debug!(
            driver = %driver.id,
            truck = %truck.id,
            route = %route.id,
            violations = violations.len(),
            "validated assignment"
        );
        violations
    }

    fn check_route_requirements(&self, driver: &Driver, route: &Route, violations: &mut Vec<Violation>) {
        if route.route_type == RouteType::Hazmat
            && self.rules.hazmat_requires_class_a
            && driver.license != LicenseLevel::ClassA
        {
            violations.push(Violation::HazmatRequiresClassA {
                driver: driver.name.clone(),
                license: driver.license,
            });
        }

        if let Some(required_years) = self.rules.min_years_for(route.route_type) {
            if driver.years_experience < required_years {
                violations.push(Violation::InsufficientExperience {
                    driver: driver.name.clone(),
                    route_type: route.route_type,
                    required_years,
                    actual_years: driver.years_experience,
                });
            }
        }
    }
}

/// Validate with the default rule set
pub fn validate_assignment(
    driver: Option<&Driver>,
    truck: Option<&Truck>,
    route: Option<&Route>,
) -> Vec<Violation> {
    AssignmentValidator::default().validate(driver, truck, route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(license: LicenseLevel, years: u32) -> Driver {
        Driver::new("d-1", "Maria Lopez", license, years)
    }

    fn standard_route() -> Route {
        Route::new("r-1", RouteType::Standard, 120.0)
    }

    #[test]
    fn test_valid_assignment() {
        let d = driver(LicenseLevel::ClassA, 10);
        let t = Truck::new("T-1", TruckClass::Heavy);
        let r = Route::new("r-2", RouteType::Hazmat, 300.0);
        assert!(validate_assignment(Some(&d), Some(&t), Some(&r)).is_empty());
    }

    #[test]
    fn test_missing_driver_short_circuits() {
        let t = Truck::new("T-1", TruckClass::Heavy).in_maintenance();
        let violations = validate_assignment(None, Some(&t), None);
        assert_eq!(violations, vec![Violation::DriverRequired]);
        assert_eq!(violations[0].to_string(), "Driver is required");
    }

    #[test]
    fn test_missing_truck_and_route() {
        let d = driver(LicenseLevel::ClassC, 0).unavailable();
        assert_eq!(
            validate_assignment(Some(&d), None, None),
            vec![Violation::TruckRequired]
        );
        let t = Truck::new("T-1", TruckClass::Light);
        let violations = validate_assignment(Some(&d), Some(&t), None);
        assert_eq!(violations, vec![Violation::RouteRequired]);
        assert_eq!(violations[0].to_string(), "Route is required");
    }

    #[test]
    fn test_class_b_on_heavy_truck() {
        let d = driver(LicenseLevel::ClassB, 5);
        let t = Truck::new("T-9", TruckClass::Heavy);
        let violations = validate_assignment(Some(&d), Some(&t), Some(&standard_route()));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind(), "license_below_truck_class");
        assert_eq!(
            violations[0].to_string(),
            "Maria Lopez holds a Class B license but truck T-9 (Heavy) requires Class A"
        );
    }

    #[test]
    fn test_medium_truck_license_levels() {
        let t = Truck::new("T-2", TruckClass::Medium);
        let r = standard_route();
        for license in [LicenseLevel::ClassA, LicenseLevel::ClassB] {
            let d = driver(license, 1);
            assert!(validate_assignment(Some(&d), Some(&t), Some(&r)).is_empty());
        }
        let d = driver(LicenseLevel::ClassC, 1);
        let violations = validate_assignment(Some(&d), Some(&t), Some(&r));
        assert_eq!(violations[0].kind(), "license_below_truck_class");
    }

    #[test]
    fn test_all_rules_reported_in_order() {
        let d = driver(LicenseLevel::ClassC, 1).unavailable();
        let t = Truck::new("T-3", TruckClass::Heavy).unavailable().in_maintenance();
        let r = Route::new("r-3", RouteType::Hazmat, 80.0);
        let kinds: Vec<&str> = validate_assignment(Some(&d), Some(&t), Some(&r))
            .iter()
            .map(Violation::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                "license_below_truck_class",
                "driver_unavailable",
                "truck_unavailable",
                "truck_in_maintenance",
                "hazmat_requires_class_a",
            ]
        );
    }

    #[test]
    fn test_hazmat_needs_exactly_class_a() {
        let t = Truck::new("T-4", TruckClass::Light);
        let r = Route::new("r-4", RouteType::Hazmat, 50.0);
        let d = driver(LicenseLevel::ClassB, 20);
        let violations = validate_assignment(Some(&d), Some(&t), Some(&r));
        assert_eq!(
            violations,
            vec![Violation::HazmatRequiresClassA {
                driver: "Maria Lopez".to_string(),
                license: LicenseLevel::ClassB,
            }]
        );
    }

    #[test]
    fn test_hazmat_class_a_rule_disabled() {
        let validator = AssignmentValidator::new(RuleSet {
            hazmat_requires_class_a: false,
            ..Default::default()
        });
        let t = Truck::new("T-4", TruckClass::Light);
        let r = Route::new("r-4", RouteType::Hazmat, 50.0);
        let d = driver(LicenseLevel::ClassB, 20);
        assert!(validator.validate(Some(&d), Some(&t), Some(&r)).is_empty());
    }

    #[test]
    fn test_oversized_experience() {
        let t = Truck::new("T-5", TruckClass::Heavy);
        let r = Route::new("r-5", RouteType::Oversized, 200.0);
        let junior = driver(LicenseLevel::ClassA, 2);
        let violations = validate_assignment(Some(&junior), Some(&t), Some(&r));
        assert_eq!(
            violations[0].to_string(),
            "Oversized routes require at least 3 years of experience (Maria Lopez has 2)"
        );
        let senior = driver(LicenseLevel::ClassA, 3);
        assert!(validate_assignment(Some(&senior), Some(&t), Some(&r)).is_empty());
    }

    #[test]
    fn test_demo_thresholds() {
        let validator = AssignmentValidator::new(RuleSet::with_demo_thresholds());
        let t = Truck::new("T-6", TruckClass::Heavy);
        let rookie = driver(LicenseLevel::ClassA, 0);

        let long_haul = Route::new("r-6", RouteType::LongHaul, 900.0);
        let violations = validator.validate(Some(&rookie), Some(&t), Some(&long_haul));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind(), "insufficient_experience");

        let hazmat = Route::new("r-7", RouteType::Hazmat, 90.0);
        let one_year = driver(LicenseLevel::ClassA, 1);
        let violations = validator.validate(Some(&one_year), Some(&t), Some(&hazmat));
        assert_eq!(violations.len(), 1);

        // default rules ignore both thresholds
        assert!(validate_assignment(Some(&rookie), Some(&t), Some(&long_haul)).is_empty());
    }

    #[test]
    fn test_violation_json_shape() {
        let v = Violation::TruckInMaintenance {
            truck: "T-7".to_string(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "truck_in_maintenance");
        assert_eq!(json["truck"], "T-7");
        let unit = serde_json::to_value(Violation::DriverRequired).unwrap();
        assert_eq!(unit["kind"], "driver_required");
    }
}
