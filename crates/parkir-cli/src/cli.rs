//! CLI definition using clap

use clap::{Parser, Subcommand};
use parkir_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parkir")]
#[command(version)]
#[command(about = "Fixed-capacity parking facility: park vehicles, release spots, charge hourly fees")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive parking menu
    Run {
        /// Number of parking spots. Uses config value if not specified.
        #[arg(long, short = 'c')]
        capacity: Option<i64>,

        /// Do not clear the screen between interactions (overrides config)
        #[arg(long)]
        no_clear: bool,
    },

    /// Replay a script of park/release/list/advance instructions ("-" reads stdin)
    Replay {
        /// Path to script file
        script: PathBuf,

        /// Number of parking spots. Uses config value if not specified.
        #[arg(long, short = 'c')]
        capacity: Option<i64>,
    },

    /// Show hourly rates per vehicle category
    Rates,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default capacity
        #[arg(long)]
        set_capacity: Option<i64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency label
        #[arg(long)]
        set_currency: Option<String>,

        /// Enable/disable screen clearing in the interactive menu
        #[arg(long)]
        set_clear_screen: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["parkir", "run", "--capacity", "5", "--no-clear", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Run { capacity, no_clear } => {
                assert_eq!(capacity, Some(5));
                assert!(no_clear);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_replay_stdin() {
        let cli = Cli::try_parse_from(["parkir", "-v", "replay", "-"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Replay { ref script, capacity: None } if script.as_os_str() == "-"));
    }
}
