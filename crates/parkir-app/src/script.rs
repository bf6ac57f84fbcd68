//! Replay scripts
//!
//! One instruction per line:
//!
//! ```text
//! # comment
//! park "B 1234 XY" car
//! advance 1h30m
//! release 1
//! list
//! ```

use chrono::{DateTime, Duration, Utc};
use parkir_domain::ManualClock;
use parkir_types::{ArrivalEvent, DepartureEvent, Error, Result, SpotView, VehicleCategory};

use crate::service::ParkingService;

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Park { plate: String, category: VehicleCategory },
    Release { spot_number: usize },
    List,
    Advance { by: Duration },
}

/// What a single instruction produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Arrival(ArrivalEvent),
    Departure(DepartureEvent),
    Listing(Vec<SpotView>),
    Advanced { now: DateTime<Utc> },
}

/// Parse a whole script into `(line_number, instruction)` pairs
pub fn parse_script(text: &str) -> Result<Vec<(usize, Instruction)>> {
    let mut instructions = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        if let Some(instruction) = parse_line(raw).map_err(|message| Error::Script {
            line: line_number,
            message,
        })? {
            instructions.push((line_number, instruction));
        }
    }
    Ok(instructions)
}

fn parse_line(raw: &str) -> std::result::Result<Option<Instruction>, String> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(line).map_err(|e| e.to_string())?;
    let (command, args) = match words.split_first() {
        Some((command, args)) => (command.to_lowercase(), args),
        None => return Ok(None),
    };

    let instruction = match (command.as_str(), args) {
        ("park", [plate, category]) => Instruction::Park {
            plate: plate.clone(),
            category: category.parse::<VehicleCategory>().map_err(|e: Error| e.to_string())?,
        },
        ("park", _) => return Err("usage: park <plate> <category>".to_string()),
        ("release", [spot]) => Instruction::Release {
            spot_number: spot
                .parse()
                .map_err(|_| format!("'{}' is not a spot number", spot))?,
        },
        ("release", _) => return Err("usage: release <spot>".to_string()),
        ("list", []) => Instruction::List,
        ("list", _) => return Err("list takes no arguments".to_string()),
        ("advance", [duration]) => Instruction::Advance {
            by: parse_duration(duration)?,
        },
        ("advance", _) => return Err("usage: advance <duration, e.g. 2h or 1h30m>".to_string()),
        (other, _) => return Err(format!("unknown instruction '{}'", other)),
    };
    Ok(Some(instruction))
}

/// Parse durations such as `2h`, `90m`, `45s` or `1h30m`
pub fn parse_duration(text: &str) -> std::result::Result<Duration, String> {
    let mut total = Duration::zero();
    let mut digits = String::new();
    let mut saw_unit = false;

    for c in text.trim().chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let amount: i64 = digits
            .parse()
            .map_err(|_| format!("invalid duration '{}'", text))?;
        let part = match c.to_ascii_lowercase() {
            'h' => Duration::try_hours(amount),
            'm' => Duration::try_minutes(amount),
            's' => Duration::try_seconds(amount),
            _ => return Err(format!("invalid duration unit '{}' in '{}'", c, text)),
        };
        total = part
            .and_then(|part| total.checked_add(&part))
            .ok_or_else(|| format!("duration '{}' is out of range", text))?;
        digits.clear();
        saw_unit = true;
    }

    if !digits.is_empty() || !saw_unit {
        return Err(format!("invalid duration '{}' (use h, m or s units)", text));
    }
    Ok(total)
}

/// Run one instruction against a session driven by a manual clock
pub fn apply(service: &mut ParkingService<ManualClock>, instruction: &Instruction) -> Result<Outcome> {
    match instruction {
        Instruction::Park { plate, category } => service.park(plate, *category).map(Outcome::Arrival),
        Instruction::Release { spot_number } => service.release(*spot_number).map(Outcome::Departure),
        Instruction::List => Ok(Outcome::Listing(service.spots())),
        Instruction::Advance { by } => service
            .clock()
            .advance(*by)
            .map(|now| Outcome::Advanced { now }),
    }
}
