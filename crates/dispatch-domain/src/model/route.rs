//! Route type definitions

use dispatch_types::RouteType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub route_type: RouteType,
    pub distance_miles: f64,
}

impl Route {
    pub fn new(id: impl Into<String>, route_type: RouteType, distance_miles: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            route_type,
            distance_miles,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name when set, otherwise the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
