use clap::{Parser, Subcommand};
use cleanmap_core::config::{parse_distance_unit, parse_limit, parse_validity_mode};
use cleanmap_core::models::{DistanceUnit, ValidityMode};
use std::path::PathBuf;

/// Cleanmap - proximity queries over polluted locations
#[derive(Parser, Debug)]
#[command(name = "cleanmap")]
#[command(about = "Proximity queries over polluted locations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML config file (defaults to ./cleanmap.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Great-circle distance between two points
    Distance(DistanceArgs),

    /// Order a location file by distance from a reference point
    Nearby(NearbyArgs),

    /// Validate the coordinates in a location file
    Check(CheckArgs),

    /// Show the effective configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct DistanceArgs {
    /// Latitude of the first point
    pub lat1: f64,

    /// Longitude of the first point
    pub lon1: f64,

    /// Latitude of the second point
    pub lat2: f64,

    /// Longitude of the second point
    pub lon2: f64,

    /// Distance unit (meters, kilometers, miles, feet)
    #[arg(long, value_parser = unit_arg)]
    pub unit: Option<DistanceUnit>,
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct NearbyArgs {
    /// JSON file holding an array of location records
    pub file: PathBuf,

    /// Latitude of the reference point
    #[arg(long)]
    pub lat: f64,

    /// Longitude of the reference point
    #[arg(long)]
    pub lon: f64,

    /// Only keep locations within this distance (in the active unit)
    #[arg(long, value_name = "DISTANCE")]
    pub within: Option<f64>,

    /// Maximum number of locations to return
    #[arg(long, value_parser = limit_arg)]
    pub limit: Option<usize>,

    /// Distance unit (meters, kilometers, miles, feet)
    #[arg(long, value_parser = unit_arg)]
    pub unit: Option<DistanceUnit>,

    /// How to treat records with invalid coordinates (strict or lenient)
    #[arg(long, value_parser = validity_arg)]
    pub validity: Option<ValidityMode>,

    /// Print a GeoJSON FeatureCollection (takes precedence over --json)
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// JSON file holding an array of location records
    pub file: PathBuf,
}

fn unit_arg(s: &str) -> Result<DistanceUnit, String> {
    parse_distance_unit(s).map_err(|e| e.to_string())
}

fn validity_arg(s: &str) -> Result<ValidityMode, String> {
    parse_validity_mode(s).map_err(|e| e.to_string())
}

fn limit_arg(s: &str) -> Result<usize, String> {
    parse_limit(s).map_err(|e| e.to_string())
}
