//! Truck type definitions

use dispatch_types::{LicenseLevel, TruckClass};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Display identifier (unit number)
    pub id: String,
    pub class: TruckClass,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub in_maintenance: bool,
}

fn default_true() -> bool {
    true
}

impl Truck {
    pub fn new(id: impl Into<String>, class: TruckClass) -> Self {
        Self {
            id: id.into(),
            class,
            available: true,
            in_maintenance: false,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn in_maintenance(mut self) -> Self {
        self.in_maintenance = true;
        self
    }

    pub fn required_license(&self) -> LicenseLevel {
        self.class.required_license()
    }

    /// Available and out of the shop
    pub fn is_assignable(&self) -> bool {
        self.available && !self.in_maintenance
    }
}
