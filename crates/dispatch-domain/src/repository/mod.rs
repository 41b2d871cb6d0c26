//! Repository trait definitions for fleet data

use dispatch_types::Error;

use crate::model::{Driver, Fleet, PlannedAssignment, Route, Truck};

/// Read access to drivers, trucks, routes and planned assignments
pub trait FleetRepository {
    fn find_driver(&self, id: &str) -> Result<Option<Driver>, Error>;

    fn find_truck(&self, id: &str) -> Result<Option<Truck>, Error>;

    fn find_route(&self, id: &str) -> Result<Option<Route>, Error>;

    /// All drivers sorted by id
    fn all_drivers(&self) -> Result<Vec<Driver>, Error>;

    /// All trucks sorted by id
    fn all_trucks(&self) -> Result<Vec<Truck>, Error>;

    /// All routes sorted by id
    fn all_routes(&self) -> Result<Vec<Route>, Error>;

    fn planned_assignments(&self) -> Result<Vec<PlannedAssignment>, Error>;

    /// Snapshot of the whole fleet
    fn snapshot(&self) -> Result<Fleet, Error> {
        Ok(Fleet {
            drivers: self.all_drivers()?,
            trucks: self.all_trucks()?,
            routes: self.all_routes()?,
            assignments: self.planned_assignments()?,
        })
    }
}

/// In-memory fleet as a repository
impl FleetRepository for Fleet {
    fn find_driver(&self, id: &str) -> Result<Option<Driver>, Error> {
        Ok(self.driver(id).cloned())
    }

    fn find_truck(&self, id: &str) -> Result<Option<Truck>, Error> {
        Ok(self.truck(id).cloned())
    }

    fn find_route(&self, id: &str) -> Result<Option<Route>, Error> {
        Ok(self.route(id).cloned())
    }

    fn all_drivers(&self) -> Result<Vec<Driver>, Error> {
        let mut drivers = self.drivers.clone();
        drivers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(drivers)
    }

    fn all_trucks(&self) -> Result<Vec<Truck>, Error> {
        let mut trucks = self.trucks.clone();
        trucks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(trucks)
    }

    fn all_routes(&self) -> Result<Vec<Route>, Error> {
        let mut routes = self.routes.clone();
        routes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(routes)
    }

    fn planned_assignments(&self) -> Result<Vec<PlannedAssignment>, Error> {
        Ok(self.assignments.clone())
    }
}
