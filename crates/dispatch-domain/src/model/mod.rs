//! Domain model types

pub mod assignment;
pub mod driver;
pub mod fleet;
pub mod route;
pub mod rules;
pub mod trip;
pub mod truck;

pub use assignment::PlannedAssignment;
pub use driver::Driver;
pub use fleet::Fleet;
pub use route::Route;
pub use rules::{CostRates, RuleSet};
pub use trip::TripParameters;
pub use truck::Truck;
