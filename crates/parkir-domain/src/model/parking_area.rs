//! Fixed-capacity parking area with first-fit allocation

use chrono::{DateTime, Utc};
use parkir_types::{ArrivalEvent, DepartureEvent, Error, OccupancySummary, Result, SpotView};

use super::{ParkRejected, ParkingSpot, Vehicle};

/// Largest facility `ParkingArea::new` will build
pub const MAX_CAPACITY: i64 = 100_000;

/// The whole facility. Spot `n` lives at index `n - 1`; the number of
/// spots is fixed at construction.
#[derive(Debug)]
pub struct ParkingArea {
    spots: Vec<ParkingSpot>,
}

impl ParkingArea {
    /// Create a facility with `capacity` empty spots numbered `1..=capacity`.
    ///
    /// `capacity` must be in `1..=MAX_CAPACITY`.
    pub fn new(capacity: i64) -> Result<Self> {
        if capacity <= 0 {
            return Err(Error::InvalidInput(format!(
                "capacity must be positive, got {}",
                capacity
            )));
        }
        if capacity > MAX_CAPACITY {
            return Err(Error::InvalidInput(format!(
                "capacity {} exceeds the maximum of {}",
                capacity, MAX_CAPACITY
            )));
        }
        let capacity = usize::try_from(capacity)
            .map_err(|_| Error::InvalidInput(format!("capacity {} is too large", capacity)))?;

        let spots = (1..=capacity).map(ParkingSpot::new).collect();
        Ok(Self { spots })
    }

    pub fn capacity(&self) -> usize {
        self.spots.len()
    }

    /// Park in the lowest-numbered empty spot.
    ///
    /// When every spot is taken the vehicle comes back inside the rejection.
    pub fn park_vehicle(&mut self, vehicle: Vehicle) -> std::result::Result<ArrivalEvent, ParkRejected> {
        let capacity = self.capacity();
        match self.spots.iter_mut().find(|spot| spot.is_available()) {
            Some(spot) => spot.park(vehicle),
            None => Err(ParkRejected {
                error: Error::FacilityFull { capacity },
                vehicle,
            }),
        }
    }

    /// Release the vehicle in `spot_number` and report its fee
    pub fn release_vehicle(&mut self, spot_number: usize, now: DateTime<Utc>) -> Result<DepartureEvent> {
        let capacity = self.capacity();
        let spot = spot_number
            .checked_sub(1)
            .and_then(|index| self.spots.get_mut(index))
            .ok_or(Error::InvalidSpotNumber {
                spot_number,
                capacity,
            })?;
        spot.release(now)
    }

    /// Spots in ascending number order. Each call starts a fresh pass.
    pub fn list_spots(&self) -> impl ExactSizeIterator<Item = SpotView> + '_ {
        self.spots.iter().map(ParkingSpot::view)
    }

    pub fn spot(&self, spot_number: usize) -> Option<&ParkingSpot> {
        spot_number.checked_sub(1).and_then(|index| self.spots.get(index))
    }

    /// Spot number currently holding `plate` (case-insensitive)
    pub fn find_plate(&self, plate: &str) -> Option<usize> {
        let wanted = plate.trim();
        self.spots
            .iter()
            .find(|spot| {
                spot.peek_occupant()
                    .is_some_and(|v| v.plate().eq_ignore_ascii_case(wanted))
            })
            .map(ParkingSpot::spot_number)
    }

    pub fn summary(&self) -> OccupancySummary {
        let capacity = self.capacity();
        let available = self.spots.iter().filter(|spot| spot.is_available()).count();
        OccupancySummary {
            capacity,
            occupied: capacity - available,
            available,
        }
    }
}
