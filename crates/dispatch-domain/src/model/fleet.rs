//! In-memory fleet: drivers, trucks, routes and planned assignments

use serde::{Deserialize, Serialize};

use super::{Driver, PlannedAssignment, Route, Truck};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub trucks: Vec<Truck>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub assignments: Vec<PlannedAssignment>,
}

impl Fleet {
    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn truck(&self, id: &str) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id == id)
    }

    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Sort every section by id for stable listings
    pub fn sort(&mut self) {
        self.drivers.sort_by(|a, b| a.id.cmp(&b.id));
        self.trucks.sort_by(|a, b| a.id.cmp(&b.id));
        self.routes.sort_by(|a, b| a.id.cmp(&b.id));
    }
}
