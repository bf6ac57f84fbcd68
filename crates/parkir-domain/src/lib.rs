//! Parking domain: vehicles, spots and first-fit allocation

pub mod clock;
pub mod model;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use model::{ParkRejected, ParkingArea, ParkingSpot, Vehicle, MAX_CAPACITY};
