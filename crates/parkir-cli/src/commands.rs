//! Command handlers

use std::io::{self, Read, Write};
use std::path::Path;

use chrono::Utc;
use parkir_app::script::{apply, parse_script, Outcome};
use parkir_app::{Config, ParkingService};
use parkir_domain::{ManualClock, SystemClock};
use parkir_types::{OutputFormat, Result, RATE_TABLE};
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::menu::Menu;
use crate::output::Printer;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(?output_format, capacity = config.capacity, "configuration loaded");

    match cli.command {
        Commands::Run { capacity, no_clear } => {
            let capacity = capacity.unwrap_or(config.capacity);
            // Screen clearing off if: --no-clear OR config.clear_screen=false
            let clear_screen = !no_clear && config.clear_screen;
            cmd_run(&config, capacity, clear_screen, output_format)
        }

        Commands::Replay { script, capacity } => {
            let capacity = capacity.unwrap_or(config.capacity);
            cmd_replay(&config, &script, capacity, output_format)
        }

        Commands::Rates => cmd_rates(&config, output_format),

        Commands::Config {
            show,
            set_capacity,
            set_output,
            set_currency,
            set_clear_screen,
            reset,
        } => cmd_config(show, set_capacity, set_output, set_currency, set_clear_screen, reset),
    }
}

fn cmd_run(config: &Config, capacity: i64, clear_screen: bool, output_format: OutputFormat) -> Result<()> {
    let mut service = ParkingService::new(capacity, SystemClock)?;
    let printer = Printer::new(output_format, config);
    info!(capacity, "interactive session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut service, &printer, stdin.lock(), stdout.lock(), clear_screen).run()?;

    let summary = service.summary();
    info!(occupied = summary.occupied, "interactive session ended");
    Ok(())
}

fn cmd_replay(config: &Config, script: &Path, capacity: i64, output_format: OutputFormat) -> Result<()> {
    let text = if script.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(script)?
    };
    let instructions = parse_script(&text)?;
    debug!(count = instructions.len(), "script parsed");

    let mut service = ParkingService::new(capacity, ManualClock::new(Utc::now()))?;
    let printer = Printer::new(output_format, config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut total_fees = 0.0;
    let mut refused = 0;
    for (line, instruction) in &instructions {
        match apply(&mut service, instruction) {
            Ok(Outcome::Arrival(event)) => printer.arrival(&mut out, &event)?,
            Ok(Outcome::Departure(event)) => {
                total_fees += event.fee;
                printer.departure(&mut out, &event)?;
            }
            Ok(Outcome::Listing(spots)) => printer.spots(&mut out, &service.summary(), &spots)?,
            Ok(Outcome::Advanced { now }) => debug!(line, %now, "clock advanced"),
            Err(e) if e.is_recoverable() => {
                refused += 1;
                if output_format == OutputFormat::Table {
                    write!(out, "line {}: ", line)?;
                }
                printer.error(&mut out, &e)?;
            }
            Err(e) => return Err(e),
        }
    }

    if output_format == OutputFormat::Table {
        let summary = service.summary();
        writeln!(out)?;
        writeln!(
            out,
            "Replayed {} instructions ({} refused). Occupied {}/{}. Fees collected: {}",
            instructions.len(),
            refused,
            summary.occupied,
            summary.capacity,
            printer.fee(total_fees)
        )?;
    }
    Ok(())
}

fn cmd_rates(config: &Config, output_format: OutputFormat) -> Result<()> {
    let printer = Printer::new(output_format, config);
    printer.rates(&mut io::stdout().lock(), &RATE_TABLE)
}

fn cmd_config(
    show: bool,
    set_capacity: Option<i64>,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
    set_clear_screen: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(capacity) = set_capacity {
        config.capacity = capacity;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency = currency;
        modified = true;
    }

    if let Some(clear_screen) = set_clear_screen {
        config.clear_screen = clear_screen;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
