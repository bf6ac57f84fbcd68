//! Vehicle identity and fee policy

use chrono::{DateTime, Utc};
use parkir_types::{Error, Result, VehicleCategory};

use crate::service::fee_calculator;

/// A vehicle that has arrived at the facility.
///
/// Fields are private so the arrival time cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    plate: String,
    category: VehicleCategory,
    arrived_at: DateTime<Utc>,
}

impl Vehicle {
    /// Create a vehicle. The plate is trimmed and must not be empty.
    pub fn new(
        plate: impl Into<String>,
        category: VehicleCategory,
        arrived_at: DateTime<Utc>,
    ) -> Result<Self> {
        let plate = plate.into().trim().to_string();
        if plate.is_empty() {
            return Err(Error::InvalidInput("plate number must not be empty".to_string()));
        }
        Ok(Self {
            plate,
            category,
            arrived_at,
        })
    }

    /// Create a vehicle from a textual category ("car", "motor", "2", ...)
    pub fn parse(plate: impl Into<String>, category: &str, arrived_at: DateTime<Utc>) -> Result<Self> {
        let category = category.parse::<VehicleCategory>()?;
        Self::new(plate, category, arrived_at)
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn arrived_at(&self) -> DateTime<Utc> {
        self.arrived_at
    }

    pub fn hourly_rate(&self) -> f64 {
        self.category.hourly_rate()
    }

    /// Fee owed if the vehicle left at `now`
    pub fn compute_fee(&self, now: DateTime<Utc>) -> f64 {
        fee_calculator::compute_fee(self.hourly_rate(), self.arrived_at, now)
    }
}
