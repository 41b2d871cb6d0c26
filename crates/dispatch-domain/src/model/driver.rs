//! Driver type definitions

use dispatch_types::LicenseLevel;
use serde::{Deserialize, Serialize};

/// A driver who can be assigned to a truck and route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Stable identifier used by the fleet file
    pub id: String,
    pub name: String,
    pub license: LicenseLevel,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl Driver {
    pub fn new(id: impl Into<String>, name: impl Into<String>, license: LicenseLevel, years_experience: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            license,
            years_experience,
            available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}
