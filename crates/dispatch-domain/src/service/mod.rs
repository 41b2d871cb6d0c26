//! Domain services

pub mod assignment_check;
pub mod assignment_validator;
pub mod fleet_query;
pub mod pay_calculator;

pub use assignment_check::{check_assignments, generate_assignment_report, AssignmentCheckResult};
pub use assignment_validator::{validate_assignment, AssignmentValidator, Violation};
pub use fleet_query::{paginate, query_drivers, query_trucks, FleetQuery, Page};
pub use pay_calculator::{calculate_trip_cost, CostBreakdown, PayCalculator};
