//! Planned assignment entries

use serde::{Deserialize, Serialize};

/// Driver, truck and route ids planned to run together.
/// A missing id is kept as `None` so the check can report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAssignment {
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub truck: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
}

impl PlannedAssignment {
    pub fn new(driver: impl Into<String>, truck: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            driver: Some(driver.into()),
            truck: Some(truck.into()),
            route: Some(route.into()),
        }
    }

    /// Short "driver / truck / route" label, `-` for missing ids
    pub fn label(&self) -> String {
        format!(
            "{} / {} / {}",
            self.driver.as_deref().unwrap_or("-"),
            self.truck.as_deref().unwrap_or("-"),
            self.route.as_deref().unwrap_or("-"),
        )
    }
}
