//! Error types for parkir

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parking spot #{spot_number} is already occupied")]
    SpotOccupied { spot_number: usize },

    #[error("Parking spot #{spot_number} is empty")]
    SpotEmpty { spot_number: usize },

    #[error("All {capacity} parking spots are full")]
    FacilityFull { capacity: usize },

    #[error("Invalid parking spot number {spot_number} (valid: 1-{capacity})")]
    InvalidSpotNumber { spot_number: usize, capacity: usize },

    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Facility conditions the caller reports and moves on from.
    /// Anything else (IO, config, scripts) ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::SpotOccupied { .. }
                | Error::SpotEmpty { .. }
                | Error::FacilityFull { .. }
                | Error::InvalidSpotNumber { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
