//! Domain services

pub mod fee_calculator;

pub use fee_calculator::{compute_fee, hours_elapsed};
