//! Domain model types

pub mod parking_area;
pub mod parking_spot;
pub mod vehicle;

pub use parking_area::{ParkingArea, MAX_CAPACITY};
pub use parking_spot::{ParkRejected, ParkingSpot};
pub use vehicle::Vehicle;
