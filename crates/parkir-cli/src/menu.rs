//! Interactive console menu

use std::io::{BufRead, Write};

use parkir_app::ParkingService;
use parkir_domain::Clock;
use parkir_types::{Error, Result, VehicleCategory};

use crate::output::Printer;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub struct Menu<'a, C: Clock, R, W> {
    service: &'a mut ParkingService<C>,
    printer: &'a Printer,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, C: Clock, R: BufRead, W: Write> Menu<'a, C, R, W> {
    pub fn new(
        service: &'a mut ParkingService<C>,
        printer: &'a Printer,
        input: R,
        output: W,
        clear_screen: bool,
    ) -> Self {
        Self {
            service,
            printer,
            input,
            output,
            clear_screen,
        }
    }

    /// Run until the user picks "Exit" or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Menu:")?;
            writeln!(self.output, "1. Park vehicle")?;
            writeln!(self.output, "2. Release vehicle")?;
            writeln!(self.output, "3. Show parking area")?;
            writeln!(self.output, "4. Exit")?;
            let Some(choice) = self.prompt("Choose menu: ")? else {
                return Ok(());
            };
            self.clear()?;

            let outcome = match choice.as_str() {
                "1" => self.park(),
                "2" => self.release(),
                "3" => self.show(),
                "4" => return Ok(()),
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Ok(true)
                }
            };

            match outcome {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) if e.is_recoverable() => self.printer.error(&mut self.output, &e)?,
                Err(e) => return Err(e),
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                return Ok(());
            }
            self.clear()?;
        }
    }

    /// Returns `Ok(false)` when input ended mid-dialog
    fn park(&mut self) -> Result<bool> {
        let Some(plate) = self.prompt("Plate number: ")? else {
            return Ok(false);
        };
        writeln!(self.output, "Vehicle type:")?;
        for (index, category) in VehicleCategory::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, category)?;
        }
        let Some(category) = self.prompt("Choose vehicle type: ")? else {
            return Ok(false);
        };
        self.clear()?;

        let category = category.parse::<VehicleCategory>()?;
        let event = self.service.park(&plate, category)?;
        self.printer.arrival(&mut self.output, &event)?;
        Ok(true)
    }

    fn release(&mut self) -> Result<bool> {
        let Some(text) = self.prompt("Parking spot number: ")? else {
            return Ok(false);
        };
        let spot_number = text
            .parse::<usize>()
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a spot number", text)))?;

        let event = self.service.release(spot_number)?;
        self.printer.departure(&mut self.output, &event)?;
        Ok(true)
    }

    fn show(&mut self) -> Result<bool> {
        let spots = self.service.spots();
        self.printer.spots(&mut self.output, &self.service.summary(), &spots)?;
        Ok(true)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parkir_app::Config;
    use parkir_domain::ManualClock;
    use parkir_types::OutputFormat;
    use std::io::Cursor;

    fn service(capacity: i64) -> ParkingService<ManualClock> {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        ParkingService::new(capacity, ManualClock::new(start)).unwrap()
    }

    fn run_menu(service: &mut ParkingService<ManualClock>, input: &str, clear: bool) -> String {
        let printer = Printer::new(OutputFormat::Table, &Config::default());
        let mut output = Vec::new();
        Menu::new(service, &printer, Cursor::new(input.as_bytes()), &mut output, clear)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_park_and_show() {
        let mut service = service(2);
        let text = run_menu(&mut service, "1\nB1234XY\n1\n\n3\n\n4\n", false);
        assert!(text.contains("Car B1234XY parked at spot #1"));
        assert!(text.contains("Car - B1234XY"));
        assert!(text.contains("Spot #2    Empty"));
        assert_eq!(service.summary().occupied, 1);
    }

    #[test]
    fn test_full_then_release() {
        let mut service = service(1);
        let input = "1\nB1234XY\n1\n\n1\nB5678ZZ\n2\n\n2\n1\n\n4\n";
        let text = run_menu(&mut service, input, false);
        assert!(text.contains("All parking spots are full."));
        assert!(text.contains("B1234XY left spot #1"));
        assert!(text.contains("Parking fee:    Rp 0"));
        assert_eq!(service.summary().occupied, 0);
    }

    #[test]
    fn test_invalid_entries_keep_running() {
        let mut service = service(2);
        let input = "9\n\n1\nB1\n7\n\n2\nabc\n\n2\n5\n\n2\n1\n\n4\n";
        let text = run_menu(&mut service, input, false);
        assert!(text.contains("Invalid choice."));
        assert!(text.contains("unknown vehicle category '7'"));
        assert!(text.contains("'abc' is not a spot number"));
        assert!(text.contains("Invalid parking spot number (choose 1-2)."));
        assert!(text.contains("Parking spot #1 is empty."));
    }

    #[test]
    fn test_eof_ends_session() {
        let mut service = service(2);
        let text = run_menu(&mut service, "1\nB1234XY\n", false);
        assert!(text.contains("Plate number: "));
        assert_eq!(service.summary().occupied, 0);
    }

    #[test]
    fn test_clear_screen() {
        let mut service = service(1);
        let text = run_menu(&mut service, "3\n\n4\n", true);
        assert!(text.contains(CLEAR_SCREEN));
        let text = run_menu(&mut service, "3\n\n4\n", false);
        assert!(!text.contains(CLEAR_SCREEN));
    }
}
