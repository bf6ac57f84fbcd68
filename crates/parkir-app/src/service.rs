//! Parking use cases: the domain area driven by a clock, with logging

use parkir_domain::{Clock, ParkingArea, Vehicle};
use parkir_types::{
    ArrivalEvent, DepartureEvent, Error, OccupancySummary, Result, SpotView, VehicleCategory,
};
use tracing::{debug, info, warn};

use crate::config::Config;

/// Facility session. Owns the parking area and reads `now` from its clock
/// at every park and release.
pub struct ParkingService<C: Clock> {
    area: ParkingArea,
    clock: C,
}

impl<C: Clock> ParkingService<C> {
    pub fn new(capacity: i64, clock: C) -> Result<Self> {
        let area = ParkingArea::new(capacity)?;
        debug!(capacity = area.capacity(), "parking area created");
        Ok(Self { area, clock })
    }

    pub fn from_config(config: &Config, clock: C) -> Result<Self> {
        Self::new(config.capacity, clock)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Park a newly arrived vehicle in the first free spot.
    ///
    /// A plate that is already inside is refused with `InvalidInput`.
    pub fn park(&mut self, plate: &str, category: VehicleCategory) -> Result<ArrivalEvent> {
        let vehicle = Vehicle::new(plate, category, self.clock.now())?;

        if let Some(spot_number) = self.area.find_plate(vehicle.plate()) {
            warn!(plate = vehicle.plate(), spot_number, "plate already parked");
            return Err(Error::InvalidInput(format!(
                "vehicle {} is already parked at spot #{}",
                vehicle.plate(),
                spot_number
            )));
        }

        match self.area.park_vehicle(vehicle) {
            Ok(event) => {
                info!(
                    plate = %event.plate,
                    category = %event.category,
                    spot_number = event.spot_number,
                    "vehicle parked"
                );
                Ok(event)
            }
            Err(rejected) => {
                warn!(plate = rejected.vehicle.plate(), error = %rejected.error, "vehicle turned away");
                Err(rejected.into_error())
            }
        }
    }

    /// Release `spot_number` at the current clock time
    pub fn release(&mut self, spot_number: usize) -> Result<DepartureEvent> {
        let now = self.clock.now();
        match self.area.release_vehicle(spot_number, now) {
            Ok(event) => {
                info!(
                    plate = %event.plate,
                    spot_number = event.spot_number,
                    hours = event.hours_parked,
                    fee = event.fee,
                    "vehicle departed"
                );
                Ok(event)
            }
            Err(e) => {
                warn!(spot_number, error = %e, "release refused");
                Err(e)
            }
        }
    }

    pub fn spots(&self) -> Vec<SpotView> {
        self.area.list_spots().collect()
    }

    pub fn summary(&self) -> OccupancySummary {
        self.area.summary()
    }
}
