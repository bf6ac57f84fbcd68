//! Application service layer - config, parking sessions, replay scripts

pub mod config;
pub mod script;
pub mod service;

pub use config::Config;
pub use service::ParkingService;
