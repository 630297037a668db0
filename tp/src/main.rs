//! Trip Planner - interactive trip planning in the terminal
//!
//! CLI entry point: opens the TUI or runs a one-shot command.

use std::fs;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplanner::cli::{Cli, Command, OutputFormat, generate_after_help, get_log_path};
use tripplanner::config::Config;
use tripplanner::domain::{BudgetTier, Interest};
use tripplanner::planner::PlannerSession;
use tripplanner::{report, tui};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Cli::command().after_help(generate_after_help());
    let cli = Cli::from_arg_matches(&cmd.get_matches())?;

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(delay_ms = config.generation.delay_ms, "Trip planner loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        None => tui::run(&config).await,
        Some(Command::Generate {
            destination,
            start,
            end,
            travelers,
            budget,
            interests,
            no_delay,
            format,
        }) => {
            let request = GenerateRequest {
                destination,
                start,
                end,
                travelers,
                budget,
                interests,
                no_delay,
            };
            cmd_generate(&config, request, format).await
        }
        Some(Command::Options { format }) => cmd_options(format),
    }
}

/// Form values collected from the `generate` flags
struct GenerateRequest {
    destination: String,
    start: String,
    end: String,
    travelers: Option<String>,
    budget: Option<BudgetTier>,
    interests: Vec<Interest>,
    no_delay: bool,
}

async fn cmd_generate(config: &Config, request: GenerateRequest, format: OutputFormat) -> Result<()> {
    debug!(destination = %request.destination, "cmd_generate: called");
    let mut draft = config.initial_draft();
    draft.set_destination(request.destination);
    draft.set_start_date(&request.start)?;
    draft.set_end_date(&request.end)?;
    if let Some(travelers) = request.travelers {
        draft.set_travelers_from_str(&travelers)?;
    }
    if let Some(budget) = request.budget {
        draft.set_budget(budget);
    }
    for interest in request.interests {
        draft.toggle_interest(interest);
    }

    let delay = if request.no_delay {
        Duration::ZERO
    } else {
        config.generation.delay()
    };
    let mut session = PlannerSession::new(draft, delay);
    let plan = session.generate().await?;

    print!("{}", report::format_plan(plan, format)?);
    Ok(())
}

fn cmd_options(format: OutputFormat) -> Result<()> {
    debug!(%format, "cmd_options: called");
    print!("{}", report::format_options(format)?);
    Ok(())
}
