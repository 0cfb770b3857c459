use std::time::Duration;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use linetrack_core::{model::Coordinate, util::time_ops};
use serde::{Deserialize, Serialize};

use crate::app::{AppConfig, AppError, OutputFormat};

/// command line tool computing shuttle line itineraries and tracking
/// vehicles against them
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct LinetrackCliArguments {
    /// TOML configuration file. linetrack.toml is used when present.
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// JSON definition store, overrides the configured store_file
    #[arg(short, long, global = true)]
    pub store: Option<String>,
    /// output format, overrides the configured output_format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: LinetrackOperation,
}

impl LinetrackCliArguments {
    pub fn run(&self) -> Result<(), AppError> {
        let config = AppConfig::load(self.config.as_deref())?
            .with_overrides(self.store.as_deref(), self.format);
        self.op.run(&config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum LinetrackOperation {
    /// computes and prints the itinerary of a line
    Itinerary {
        /// id of the line
        #[arg(short, long)]
        line: String,
    },
    /// computes one tracking snapshot of a line
    Track {
        /// id of the line
        #[arg(short, long)]
        line: String,
        /// clock time to track at, HH:MM or HH:MM:SS. defaults to now.
        #[arg(long, value_parser = parse_clock_time)]
        at: Option<NaiveTime>,
        /// simulate the vehicle at this percentage of the service window
        #[arg(long)]
        cursor: Option<f64>,
        /// switch to manual mode with the vehicle at this stop of the active trip
        #[arg(long)]
        manual_stop: Option<usize>,
        /// latitude of a reported vehicle position
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// longitude of a reported vehicle position
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },
    /// tracks a line against the wall clock, printing a snapshot every tick
    Watch {
        /// id of the line
        #[arg(short, long)]
        line: String,
        /// stop after this many ticks. runs until interrupted otherwise.
        #[arg(short, long)]
        ticks: Option<usize>,
        /// time between ticks, overrides the configured tick_interval. provide
        /// in human-readable time values 1s, 500ms, 1m...
        #[arg(short, long, value_parser = parse_duration)]
        interval: Option<Duration>,
    },
    /// lists the stored routes
    Routes,
    /// lists the stored lines
    Lines,
}

impl LinetrackOperation {
    pub fn run(&self, config: &AppConfig) -> Result<(), AppError> {
        match self {
            LinetrackOperation::Itinerary { line } => crate::app::itinerary::run(config, line),
            LinetrackOperation::Track {
                line,
                at,
                cursor,
                manual_stop,
                lat,
                lng,
            } => {
                let position = match (lat, lng) {
                    (Some(lat), Some(lng)) => Some(Coordinate::new(*lat, *lng)),
                    (None, None) => None,
                    _ => {
                        return Err(AppError::InvalidArgument(String::from(
                            "a position needs both --lat and --lng",
                        )))
                    }
                };
                let options = crate::app::track::TrackOptions {
                    at: *at,
                    cursor: *cursor,
                    manual_stop: *manual_stop,
                    position,
                };
                crate::app::track::run(config, line, &options)
            }
            LinetrackOperation::Watch {
                line,
                ticks,
                interval,
            } => crate::app::watch::run(config, line, *ticks, interval.unwrap_or(config.tick_interval)),
            LinetrackOperation::Routes => crate::app::list::run_routes(config),
            LinetrackOperation::Lines => crate::app::list::run_lines(config),
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {}", e))
}

fn parse_clock_time(s: &str) -> Result<NaiveTime, String> {
    time_ops::parse_clock_time(s).map_err(|e| format!("Invalid clock time '{s}': {e}"))
}
