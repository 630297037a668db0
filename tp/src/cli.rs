//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::{BudgetTier, Interest};

/// Trip Planner - plan a trip from the terminal
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Collect trip parameters and generate a sample itinerary",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute (default: interactive TUI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a plan without the TUI and print it
    Generate {
        /// Where to go, e.g. "Rome, Italy"
        #[arg(short, long, default_value = "")]
        destination: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(short, long, default_value = "")]
        end: String,

        /// Number of travelers (defaults to config)
        #[arg(short, long)]
        travelers: Option<String>,

        /// Budget tier: budget, medium, luxury (defaults to config)
        #[arg(short, long)]
        budget: Option<BudgetTier>,

        /// Interest tag (repeatable); giving the same tag twice deselects it
        #[arg(short, long = "interest")]
        interests: Vec<Interest>,

        /// Skip the artificial generation delay
        #[arg(long)]
        no_delay: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the destinations, interests and budget tiers the form offers
    Options {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Path of the log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs")
        .join("tripplanner.log")
}

/// Build the after-help text shown under `--help`
pub fn generate_after_help() -> String {
    debug!("generate_after_help: called");
    let mut help = String::new();
    help.push_str("Run without a subcommand to open the interactive planner.\n");
    help.push('\n');
    help.push_str(&format!("Logs are written to: {}\n", get_log_path().display()));
    help
}

/// Output format for printed plans and option lists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text, json, or yaml", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "tp",
            "generate",
            "-d",
            "Rome, Italy",
            "-s",
            "2024-06-01",
            "-e",
            "2024-06-04",
            "--budget",
            "luxury",
            "-i",
            "food",
            "-i",
            "culture",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Generate {
                destination,
                budget,
                interests,
                format,
                no_delay,
                ..
            }) => {
                assert_eq!(destination, "Rome, Italy");
                assert_eq!(budget, Some(BudgetTier::Luxury));
                assert_eq!(interests, vec![Interest::Food, Interest::Culture]);
                assert_eq!(format, OutputFormat::Json);
                assert!(!no_delay);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tp"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_unknown_budget() {
        assert!(Cli::try_parse_from(["tp", "generate", "--budget", "platinum"]).is_err());
    }
}
