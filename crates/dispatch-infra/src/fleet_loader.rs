//! Fleet data loader from TOML
//!
//! A fleet file has `[[drivers]]`, `[[trucks]]`, `[[routes]]` and
//! `[[assignments]]` tables. Ids must be unique within each section.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use dispatch_domain::model::Fleet;
use dispatch_types::{FleetError, Result};
use tracing::{debug, info};

/// Fleet loaded from a TOML file, sorted by id
#[derive(Debug, Clone)]
pub struct FleetLoader {
    fleet: Fleet,
}

impl FleetLoader {
    /// Load fleet data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FleetError::Read(format!("{}: {}", path.display(), e))
        })?;

        let loader = Self::load_from_str(&content)?;
        info!(
            path = %path.display(),
            drivers = loader.fleet.drivers.len(),
            trucks = loader.fleet.trucks.len(),
            routes = loader.fleet.routes.len(),
            "loaded fleet file"
        );
        Ok(loader)
    }

    /// Load fleet data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut fleet: Fleet =
            toml::from_str(toml_content).map_err(|e| FleetError::Parse(e.to_string()))?;

        ensure_unique("driver", fleet.drivers.iter().map(|d| d.id.as_str()))?;
        ensure_unique("truck", fleet.trucks.iter().map(|t| t.id.as_str()))?;
        ensure_unique("route", fleet.routes.iter().map(|r| r.id.as_str()))?;

        fleet.sort();
        debug!(assignments = fleet.assignments.len(), "parsed fleet");
        Ok(Self { fleet })
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}

fn ensure_unique<'a>(section: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FleetError::DuplicateId {
                section,
                id: id.to_string(),
            }
            .into());
        }
    }
    Ok(())
}
