//! Dispatch domain: fleet models, assignment rules, and trip costing

pub mod model;
pub mod repository;
pub mod service;
