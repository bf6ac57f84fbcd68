//! End-to-end scenarios for the parking area

use chrono::{DateTime, Duration, TimeZone, Utc};
use parkir_domain::{ParkingArea, Vehicle};
use parkir_types::{Error, VehicleCategory};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

fn car(plate: &str, at: DateTime<Utc>) -> Vehicle {
    Vehicle::new(plate, VehicleCategory::Car, at).unwrap()
}

fn motorcycle(plate: &str, at: DateTime<Utc>) -> Vehicle {
    Vehicle::new(plate, VehicleCategory::Motorcycle, at).unwrap()
}

#[test]
fn test_capacity_yields_exact_spot_count() {
    for capacity in [1_i64, 2, 5, 20, 64] {
        let area = ParkingArea::new(capacity).unwrap();
        let spots: Vec<_> = area.list_spots().collect();
        assert_eq!(spots.len() as i64, capacity);
        for (index, spot) in spots.iter().enumerate() {
            assert_eq!(spot.spot_number, index + 1);
            assert!(!spot.is_occupied);
            assert!(spot.occupant_plate.is_none());
        }
    }
}

#[test]
fn test_overfill_is_first_fit_then_full() {
    for capacity in [1_usize, 3, 20] {
        let mut area = ParkingArea::new(capacity as i64).unwrap();
        let mut previous = 0;
        for i in 0..capacity {
            let arrival = area.park_vehicle(car(&format!("B{}", i), t0())).unwrap();
            assert!(arrival.spot_number > previous);
            previous = arrival.spot_number;
        }
        assert_eq!(previous, capacity);

        let rejected = area.park_vehicle(car("OVERFLOW", t0())).unwrap_err();
        assert!(matches!(rejected.error, Error::FacilityFull { .. }));
        assert_eq!(rejected.into_vehicle().plate(), "OVERFLOW");
    }
}

#[test]
fn test_double_release_is_spot_empty() {
    let mut area = ParkingArea::new(3).unwrap();
    assert!(matches!(
        area.release_vehicle(2, t0()),
        Err(Error::SpotEmpty { spot_number: 2 })
    ));

    area.park_vehicle(car("B1234XY", t0())).unwrap();
    area.release_vehicle(1, t0() + Duration::hours(1)).unwrap();
    assert!(matches!(
        area.release_vehicle(1, t0() + Duration::hours(2)),
        Err(Error::SpotEmpty { spot_number: 1 })
    ));
}

#[test]
fn test_out_of_range_release_for_all_capacities() {
    for capacity in [1_usize, 2, 10, 20] {
        let mut area = ParkingArea::new(capacity as i64).unwrap();
        for spot_number in [0, capacity + 1, capacity + 50] {
            match area.release_vehicle(spot_number, t0()) {
                Err(Error::InvalidSpotNumber { spot_number: n, capacity: c }) => {
                    assert_eq!(n, spot_number);
                    assert_eq!(c, capacity);
                }
                other => panic!("expected InvalidSpotNumber, got {:?}", other),
            }
        }
    }
}

#[test]
fn test_two_hour_fees() {
    let mut area = ParkingArea::new(2).unwrap();
    area.park_vehicle(car("CAR", t0())).unwrap();
    area.park_vehicle(motorcycle("MOTOR", t0())).unwrap();

    let later = t0() + Duration::hours(2);
    let car_departure = area.release_vehicle(1, later).unwrap();
    let motor_departure = area.release_vehicle(2, later).unwrap();
    assert!((car_departure.fee - 10000.0).abs() < 1e-9);
    assert!((motor_departure.fee - 4000.0).abs() < 1e-9);
    assert_eq!(car_departure.departed_at, later);
}

#[test]
fn test_single_spot_scenario() {
    let mut area = ParkingArea::new(1).unwrap();

    let arrival = area.park_vehicle(car("B1234XY", t0())).unwrap();
    assert_eq!(arrival.spot_number, 1);
    assert!(!area.spot(1).unwrap().is_available());

    let waiting = motorcycle("B5678ZZ", t0() + Duration::minutes(10));
    let rejected = area.park_vehicle(waiting).unwrap_err();
    assert!(matches!(rejected.error, Error::FacilityFull { capacity: 1 }));
    let waiting = rejected.into_vehicle();

    let departure = area.release_vehicle(1, t0() + Duration::hours(1)).unwrap();
    assert_eq!(departure.plate, "B1234XY");
    assert!((departure.fee - 5000.0).abs() < 1e-9);
    assert!(area.spot(1).unwrap().is_available());

    let arrival = area.park_vehicle(waiting).unwrap();
    assert_eq!(arrival.spot_number, 1);
    assert_eq!(arrival.plate, "B5678ZZ");
    assert_eq!(arrival.category, VehicleCategory::Motorcycle);

    let first: Vec<_> = area.list_spots().collect();
    let second: Vec<_> = area.list_spots().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert!(first[0].is_occupied);
    assert_eq!(first[0].occupant_plate.as_deref(), Some("B5678ZZ"));
    assert_eq!(first[0].occupant_category, Some(VehicleCategory::Motorcycle));
}
