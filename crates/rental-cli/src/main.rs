//! `rental` CLI — run availability and pricing checks against a reservation
//! list from the command line.
//!
//! Reservation lists are JSON arrays as returned by the booking service, e.g.
//! `[{"id":"r1","startDate":"2024-06-10T00:00:00Z","endDate":"2024-06-12T23:59:59Z"}]`.
//!
//! ## Usage
//!
//! ```sh
//! # Does 12-14 June clash with anything in the list?
//! rental check -i reservations.json --start 2024-06-12 --end 2024-06-14
//!
//! # Price a rental
//! rental quote --start 2024-06-12 --end 2024-06-14 --rate 49.90
//!
//! # Earliest free 3-day window from tomorrow (reads the list from stdin)
//! cat reservations.json | rental suggest --window 3
//!
//! # Merged blocked ranges for the calendar
//! rental blocked -i reservations.json
//!
//! # Build the payload to submit to the booking service
//! rental request -i reservations.json --resource car-42 --start 2024-06-20 --end 2024-06-22
//! ```
//!
//! A missing or unreadable reservation list is always an error: the CLI never
//! falls back to assuming the calendar is empty.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use rental_engine::{
    blocked_ranges, find_conflicts, parse_calendar_date, parse_reservations_json,
    prepare_booking, quote, suggest_with, DailyRate, DateRange, DateSelection, EngineConfig,
    Reservation,
};
use rust_decimal::Decimal;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rental",
    version,
    about = "Car rental availability and pricing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (search and pricing defaults)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log debug diagnostics to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a date range against existing reservations
    Check {
        /// Reservation list JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_date)]
        end: NaiveDate,
    },
    /// Compute rental duration and total cost
    Quote {
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
        /// Daily rate (defaults to the configured rate)
        #[arg(long, value_parser = parse_rate)]
        rate: Option<DailyRate>,
    },
    /// Suggest the earliest conflict-free window
    Suggest {
        /// Reservation list JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to search from (defaults to today, UTC)
        #[arg(long, value_parser = parse_date)]
        baseline: Option<NaiveDate>,
        /// Window length in days
        #[arg(long)]
        window: Option<u32>,
        /// Days after the baseline to start probing
        #[arg(long)]
        offset: Option<u32>,
        /// Maximum number of start dates to probe
        #[arg(long)]
        max_days: Option<u32>,
    },
    /// List merged blocked date ranges
    Blocked {
        /// Reservation list JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Build the booking request payload for a free date range
    Request {
        /// Reservation list JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Identifier of the car being booked
        #[arg(long)]
        resource: String,
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_date)]
        end: NaiveDate,
        /// Daily rate (defaults to the configured rate)
        #[arg(long, value_parser = parse_rate)]
        rate: Option<DailyRate>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => EngineConfig::default(),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Check { input, start, end } => {
            let reservations = read_reservations(input.as_deref())?;
            let candidate = DateRange::checked(start, end)?;
            let conflicts = find_conflicts(&candidate, &reservations);

            if conflicts.is_empty() {
                println!("available: {}", candidate);
            } else {
                println!("conflict: {}", candidate);
                for conflict in &conflicts {
                    println!(
                        "  {} reserved {} (overlap {} day(s))",
                        conflict.reservation_id, conflict.reserved, conflict.overlap_days
                    );
                }
            }
        }
        Commands::Quote { start, end, rate } => {
            let rate = rate.unwrap_or(config.pricing.daily_rate);
            let q = quote(&DateSelection::new(start, end), rate);
            println!("Duration:   {} day(s)", q.duration_days);
            println!("Daily rate: {}", rate.amount());
            println!("Total:      {}", q.total_cost);
        }
        Commands::Suggest {
            input,
            baseline,
            window,
            offset,
            max_days,
        } => {
            let reservations = read_reservations(input.as_deref())?;
            let mut search = config.search;
            if let Some(window) = window {
                search.window_length_days = window;
            }
            if let Some(offset) = offset {
                search.search_start_offset_days = offset;
            }
            if let Some(max_days) = max_days {
                search.max_search_days = max_days;
            }
            let baseline = baseline.unwrap_or_else(|| Utc::now().date_naive());

            let suggestion = suggest_with(baseline, &reservations, &search)
                .context("Failed to find an available window")?;
            info!(window = %suggestion, "suggested window");
            println!("{}", serde_json::to_string(&suggestion)?);
        }
        Commands::Blocked { input, output } => {
            let reservations = read_reservations(input.as_deref())?;
            let blocked = blocked_ranges(&reservations);
            let json = serde_json::to_string_pretty(&blocked)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Request {
            input,
            output,
            resource,
            start,
            end,
            rate,
        } => {
            let reservations = read_reservations(input.as_deref())?;
            let rate = rate.unwrap_or(config.pricing.daily_rate);
            let request = prepare_booking(resource, &DateRange::new(start, end), &reservations, rate)
                .context("Cannot book the requested dates")?;
            let json = serde_json::to_string_pretty(&request)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_calendar_date(s).map_err(|e| e.to_string())
}

fn parse_rate(s: &str) -> std::result::Result<DailyRate, String> {
    let amount: Decimal = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid rate '{}': {}", s, e))?;
    DailyRate::new(amount).map_err(|e| e.to_string())
}

fn read_reservations(path: Option<&str>) -> Result<Vec<Reservation>> {
    let json = read_input(path)?;
    let reservations =
        parse_reservations_json(&json).context("Failed to parse reservation list")?;
    debug!(count = reservations.len(), "reservations read");
    Ok(reservations)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
