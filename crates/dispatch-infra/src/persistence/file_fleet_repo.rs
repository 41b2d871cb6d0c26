//! File-based implementation of FleetRepository

use std::path::{Path, PathBuf};

use dispatch_domain::model::{Driver, PlannedAssignment, Route, Truck};
use dispatch_domain::repository::FleetRepository;
use dispatch_types::Error;

use crate::fleet_loader::FleetLoader;

/// Fleet repository backed by a TOML file
pub struct FileFleetRepository {
    toml_path: PathBuf,
    loader: FleetLoader,
}

impl FileFleetRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        if !toml_path.exists() {
            return Err(Error::FileNotFound(toml_path.display().to_string()));
        }
        let loader = FleetLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    pub fn toml_path(&self) -> &Path {
        &self.toml_path
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = FleetLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl FleetRepository for FileFleetRepository {
    fn find_driver(&self, id: &str) -> Result<Option<Driver>, Error> {
        Ok(self.loader.fleet().driver(id).cloned())
    }

    fn find_truck(&self, id: &str) -> Result<Option<Truck>, Error> {
        Ok(self.loader.fleet().truck(id).cloned())
    }

    fn find_route(&self, id: &str) -> Result<Option<Route>, Error> {
        Ok(self.loader.fleet().route(id).cloned())
    }

    fn all_drivers(&self) -> Result<Vec<Driver>, Error> {
        Ok(self.loader.fleet().drivers.clone())
    }

    fn all_trucks(&self) -> Result<Vec<Truck>, Error> {
        Ok(self.loader.fleet().trucks.clone())
    }

    fn all_routes(&self) -> Result<Vec<Route>, Error> {
        Ok(self.loader.fleet().routes.clone())
    }

    fn planned_assignments(&self) -> Result<Vec<PlannedAssignment>, Error> {
        Ok(self.loader.fleet().assignments.clone())
    }
}
