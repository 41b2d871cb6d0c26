//! Infrastructure layer - fleet file loading and repository implementations

pub mod fleet_loader;
pub mod persistence;
