//! Mission parameters — the request that drives the whole pipeline.
//!
//! Callers describe a mission (how many people, for how long, where) and
//! the inventory rules turn that into a module demand. Validation happens
//! here, at the boundary, so the placement core never sees out-of-range
//! input.

use serde::{Deserialize, Serialize};

pub const MIN_PASSENGERS: u32 = 1;
pub const MAX_PASSENGERS: u32 = 100;
pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 3650;

/// Deployment terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Moon,
    Mars,
    Asteroid,
}

/// Parameters for one habitat generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionParams {
    /// Number of passengers (1–100).
    pub passengers: u32,
    /// Mission duration in days (1–3650).
    pub duration_days: u32,
    /// Deployment terrain.
    pub terrain: Terrain,
    /// Scientific mission flag. Carried through to the exported scene;
    /// the inventory rules do not branch on it.
    pub scientific: bool,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            passengers: 10,
            duration_days: 90,
            terrain: Terrain::Moon,
            scientific: false,
        }
    }
}

/// Mission parameter validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Passenger count outside 1–100.
    PassengersOutOfRange(u32),
    /// Duration outside 1–3650 days.
    DurationOutOfRange(u32),
}

/// Validate mission parameters, returning all errors found.
pub fn validate_params(params: &MissionParams) -> Vec<ParamError> {
    let mut errors = Vec::new();
    if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&params.passengers) {
        errors.push(ParamError::PassengersOutOfRange(params.passengers));
    }
    if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&params.duration_days) {
        errors.push(ParamError::DurationOutOfRange(params.duration_days));
    }
    errors
}
