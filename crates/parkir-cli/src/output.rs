//! Output formatting module
//!
//! The domain returns events; everything the user sees is written here.

use std::io::Write;

use chrono::{DateTime, Local, Utc};
use parkir_app::Config;
use parkir_types::{
    ArrivalEvent, DepartureEvent, Error, OccupancySummary, OutputFormat, Result, SpotView, VehicleCategory,
};
use serde_json::json;

pub struct Printer {
    format: OutputFormat,
    currency: String,
    timestamp_format: String,
}

impl Printer {
    pub fn new(format: OutputFormat, config: &Config) -> Self {
        Self {
            format,
            currency: config.currency.clone(),
            timestamp_format: config.timestamp_format.clone(),
        }
    }

    fn timestamp(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(&self.timestamp_format).to_string()
    }

    /// Fee rounded to whole currency units
    pub fn fee(&self, fee: f64) -> String {
        format!("{} {:.0}", self.currency, fee)
    }

    pub fn arrival<W: Write>(&self, w: &mut W, event: &ArrivalEvent) -> Result<()> {
        if self.format == OutputFormat::Json {
            let value = json!({ "event": "arrival", "arrival": event });
            writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }
        writeln!(
            w,
            "{} {} parked at spot #{}",
            event.category, event.plate, event.spot_number
        )?;
        writeln!(w, "Arrival time:   {}", self.timestamp(event.arrived_at))?;
        Ok(())
    }

    pub fn departure<W: Write>(&self, w: &mut W, event: &DepartureEvent) -> Result<()> {
        if self.format == OutputFormat::Json {
            let value = json!({ "event": "departure", "departure": event });
            writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }
        writeln!(
            w,
            "{} {} left spot #{}",
            event.category, event.plate, event.spot_number
        )?;
        writeln!(w, "Departure time: {}", self.timestamp(event.departed_at))?;
        writeln!(w, "Duration:       {:.2} h", event.hours_parked)?;
        writeln!(w, "Parking fee:    {}", self.fee(event.fee))?;
        Ok(())
    }

    pub fn spots<W: Write>(&self, w: &mut W, summary: &OccupancySummary, spots: &[SpotView]) -> Result<()> {
        if self.format == OutputFormat::Json {
            let value = json!({ "summary": summary, "spots": spots });
            writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }
        writeln!(w, "Data Parkiran / Parking Data")?;
        writeln!(w, "============================")?;
        writeln!(
            w,
            "Occupied: {}/{}  Free: {}",
            summary.occupied, summary.capacity, summary.available
        )?;
        writeln!(w)?;
        for spot in spots {
            match (&spot.occupant_category, &spot.occupant_plate) {
                (Some(category), Some(plate)) => {
                    writeln!(w, "Spot #{:<4} {} - {}", spot.spot_number, category, plate)?
                }
                _ => writeln!(w, "Spot #{:<4} Empty", spot.spot_number)?,
            }
        }
        Ok(())
    }

    pub fn rates<W: Write>(&self, w: &mut W, rates: &[(VehicleCategory, f64)]) -> Result<()> {
        if self.format == OutputFormat::Json {
            let value: serde_json::Map<String, serde_json::Value> = rates
                .iter()
                .map(|(category, rate)| (category.label().to_lowercase(), json!(rate)))
                .collect();
            writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }
        writeln!(w, "Hourly Rates")?;
        writeln!(w, "============")?;
        for (category, rate) in rates {
            writeln!(w, "{:<12} {} / hour", category.label(), self.fee(*rate))?;
        }
        Ok(())
    }

    /// Report a refused operation. The facility keeps running.
    pub fn error<W: Write>(&self, w: &mut W, err: &Error) -> Result<()> {
        if self.format == OutputFormat::Json {
            let value = json!({ "error": error_kind(err), "message": err.to_string() });
            writeln!(w, "{}", serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }
        writeln!(w, "{}", describe_error(err))?;
        Ok(())
    }
}

pub fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::InvalidInput(_) => "invalid_input",
        Error::SpotOccupied { .. } => "spot_occupied",
        Error::SpotEmpty { .. } => "spot_empty",
        Error::FacilityFull { .. } => "facility_full",
        Error::InvalidSpotNumber { .. } => "invalid_spot_number",
        Error::Script { .. } => "script",
        Error::Io(_) => "io",
        Error::Json(_) => "json",
        Error::Config(_) => "config",
    }
}

pub fn describe_error(err: &Error) -> String {
    match err {
        Error::FacilityFull { .. } => "All parking spots are full.".to_string(),
        Error::SpotEmpty { spot_number } => format!("Parking spot #{} is empty.", spot_number),
        Error::SpotOccupied { spot_number } => format!("Parking spot #{} is already taken.", spot_number),
        Error::InvalidSpotNumber { capacity, .. } => {
            format!("Invalid parking spot number (choose 1-{}).", capacity)
        }
        other => other.to_string(),
    }
}
