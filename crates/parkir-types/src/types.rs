//! Shared vocabulary: vehicle categories, rate table, events and views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Vehicle category. Each category has exactly one hourly rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Motorcycle,
}

/// Hourly parking rates in currency units (Rp) per hour.
///
/// Adding a category means adding a variant and a row here.
pub const RATE_TABLE: [(VehicleCategory, f64); 2] = [
    (VehicleCategory::Car, 5000.0),
    (VehicleCategory::Motorcycle, 2000.0),
];

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 2] = [VehicleCategory::Car, VehicleCategory::Motorcycle];

    /// Hourly rate for this category, looked up in [`RATE_TABLE`]
    pub fn hourly_rate(self) -> f64 {
        RATE_TABLE
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0)
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Motorcycle => "Motorcycle",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleCategory {
    type Err = Error;

    /// Accepts English and Indonesian names, and the menu numbers 1 and 2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" | "mobil" | "1" => Ok(VehicleCategory::Car),
            "motorcycle" | "motor" | "motorbike" | "2" => Ok(VehicleCategory::Motorcycle),
            other => Err(Error::InvalidInput(format!(
                "unknown vehicle category '{}' (expected car or motorcycle)",
                other
            ))),
        }
    }
}

/// Emitted when a vehicle takes a spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalEvent {
    pub plate: String,
    pub category: VehicleCategory,
    pub spot_number: usize,
    pub arrived_at: DateTime<Utc>,
}

/// Emitted when a vehicle leaves a spot, with the fee it owes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartureEvent {
    pub plate: String,
    pub category: VehicleCategory,
    pub spot_number: usize,
    pub arrived_at: DateTime<Utc>,
    pub departed_at: DateTime<Utc>,
    /// Fractional hours between arrival and departure
    pub hours_parked: f64,
    /// Unrounded fee in currency units
    pub fee: f64,
}

/// Read-only snapshot of a single spot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotView {
    pub spot_number: usize,
    pub is_occupied: bool,
    pub occupant_category: Option<VehicleCategory>,
    pub occupant_plate: Option<String>,
}

/// Occupancy counts for the whole facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub capacity: usize,
    pub occupied: usize,
    pub available: usize,
}
