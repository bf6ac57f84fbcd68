//! Single parking spot state machine
//!
//! `Empty --park--> Occupied --release--> Empty`. A failed transition leaves
//! the spot untouched.

use chrono::{DateTime, Utc};
use parkir_types::{ArrivalEvent, DepartureEvent, Error, Result, SpotView};

use super::Vehicle;
use crate::service::fee_calculator;

/// A park attempt that did not take the vehicle.
///
/// The vehicle is handed back so the caller keeps ownership of it.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ParkRejected {
    pub error: Error,
    pub vehicle: Vehicle,
}

impl ParkRejected {
    pub fn into_vehicle(self) -> Vehicle {
        self.vehicle
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl From<ParkRejected> for Error {
    fn from(rejected: ParkRejected) -> Self {
        rejected.error
    }
}

#[derive(Debug)]
pub struct ParkingSpot {
    spot_number: usize,
    occupant: Option<Vehicle>,
}

impl ParkingSpot {
    pub fn new(spot_number: usize) -> Self {
        Self {
            spot_number,
            occupant: None,
        }
    }

    pub fn spot_number(&self) -> usize {
        self.spot_number
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn peek_occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    /// Take the vehicle if the spot is empty
    pub fn park(&mut self, vehicle: Vehicle) -> std::result::Result<ArrivalEvent, ParkRejected> {
        if !self.is_available() {
            return Err(ParkRejected {
                error: Error::SpotOccupied {
                    spot_number: self.spot_number,
                },
                vehicle,
            });
        }

        let event = ArrivalEvent {
            plate: vehicle.plate().to_string(),
            category: vehicle.category(),
            spot_number: self.spot_number,
            arrived_at: vehicle.arrived_at(),
        };
        self.occupant = Some(vehicle);
        Ok(event)
    }

    /// Vacate the spot, charging the occupant for the time up to `now`
    pub fn release(&mut self, now: DateTime<Utc>) -> Result<DepartureEvent> {
        let vehicle = self.occupant.take().ok_or(Error::SpotEmpty {
            spot_number: self.spot_number,
        })?;

        Ok(DepartureEvent {
            plate: vehicle.plate().to_string(),
            category: vehicle.category(),
            spot_number: self.spot_number,
            arrived_at: vehicle.arrived_at(),
            departed_at: now,
            hours_parked: fee_calculator::hours_elapsed(vehicle.arrived_at(), now),
            fee: vehicle.compute_fee(now),
        })
    }

    pub fn view(&self) -> SpotView {
        SpotView {
            spot_number: self.spot_number,
            is_occupied: !self.is_available(),
            occupant_category: self.occupant.as_ref().map(Vehicle::category),
            occupant_plate: self.occupant.as_ref().map(|v| v.plate().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use parkir_types::VehicleCategory;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    fn car(plate: &str) -> Vehicle {
        Vehicle::new(plate, VehicleCategory::Car, t0()).unwrap()
    }

    #[test]
    fn test_new_spot_is_empty() {
        let spot = ParkingSpot::new(7);
        assert_eq!(spot.spot_number(), 7);
        assert!(spot.is_available());
        assert!(spot.peek_occupant().is_none());
    }

    #[test]
    fn test_park_then_release() {
        let mut spot = ParkingSpot::new(3);
        let arrival = spot.park(car("B1234XY")).unwrap();
        assert_eq!(arrival.spot_number, 3);
        assert_eq!(arrival.plate, "B1234XY");
        assert_eq!(arrival.arrived_at, t0());
        assert!(!spot.is_available());
        assert_eq!(spot.peek_occupant().map(Vehicle::plate), Some("B1234XY"));

        let departure = spot.release(t0() + Duration::hours(1)).unwrap();
        assert_eq!(departure.plate, "B1234XY");
        assert_eq!(departure.spot_number, 3);
        assert!((departure.fee - 5000.0).abs() < 1e-9);
        assert!((departure.hours_parked - 1.0).abs() < 1e-9);
        assert!(spot.is_available());
    }

    #[test]
    fn test_park_on_occupied_returns_vehicle() {
        let mut spot = ParkingSpot::new(1);
        spot.park(car("FIRST")).unwrap();

        let rejected = spot.park(car("SECOND")).unwrap_err();
        assert!(matches!(rejected.error, Error::SpotOccupied { spot_number: 1 }));
        assert_eq!(rejected.into_vehicle().plate(), "SECOND");
        assert_eq!(spot.peek_occupant().map(Vehicle::plate), Some("FIRST"));
    }

    #[test]
    fn test_release_empty() {
        let mut spot = ParkingSpot::new(2);
        let err = spot.release(t0()).unwrap_err();
        assert!(matches!(err, Error::SpotEmpty { spot_number: 2 }));
        assert!(spot.is_available());
    }

    #[test]
    fn test_view() {
        let mut spot = ParkingSpot::new(4);
        assert_eq!(
            spot.view(),
            SpotView {
                spot_number: 4,
                is_occupied: false,
                occupant_category: None,
                occupant_plate: None,
            }
        );

        spot.park(car("B1234XY")).unwrap();
        let view = spot.view();
        assert!(view.is_occupied);
        assert_eq!(view.occupant_category, Some(VehicleCategory::Car));
        assert_eq!(view.occupant_plate.as_deref(), Some("B1234XY"));
    }
}
