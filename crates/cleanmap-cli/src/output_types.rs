use cleanmap_core::config::ConfigSource;
use cleanmap_core::models::{Coordinates, Distance, DistanceUnit, PollutedLocation, Severity};
use cleanmap_geo::Ranked;
use serde::Serialize;
use tabled::Tabled;

/// Output for distance command
#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub from: Coordinates,
    pub to: Coordinates,
    pub distance: f64,
    pub unit: DistanceUnit,
}

/// Output for nearby command
#[derive(Debug, Serialize)]
pub struct NearbyOutput {
    pub reference: Coordinates,
    pub unit: DistanceUnit,
    pub within: Option<Distance>,
    pub skipped: usize,
    pub results: Vec<NearbyItem>,
}

#[derive(Debug, Serialize)]
pub struct NearbyItem {
    pub rank: usize,
    pub id: String,
    pub title: Option<String>,
    pub coordinates: Coordinates,
    pub severity: Severity,
    pub progress: u8,
    pub radius: u32,
    /// Distance from the reference point in the output unit
    pub distance: f64,
}

impl NearbyItem {
    pub fn from_ranked(rank: usize, ranked: &Ranked<&PollutedLocation>, unit: DistanceUnit) -> Self {
        let location = ranked.item;
        Self {
            rank,
            id: location.id.to_string(),
            title: location.title.clone(),
            coordinates: location.coordinates,
            severity: location.severity,
            progress: location.progress,
            radius: location.radius,
            distance: unit.from_meters(ranked.distance),
        }
    }
}

/// Table row for nearby command
#[derive(Tabled)]
pub struct NearbyRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Latitude")]
    pub latitude: String,
    #[tabled(rename = "Longitude")]
    pub longitude: String,
    #[tabled(rename = "Severity")]
    pub severity: String,
    #[tabled(rename = "Progress")]
    pub progress: String,
    #[tabled(rename = "Distance")]
    pub distance: String,
}

impl NearbyRow {
    pub fn new(item: &NearbyItem, unit: DistanceUnit) -> Self {
        Self {
            rank: item.rank,
            title: item.title.clone().unwrap_or_else(|| item.id.clone()),
            latitude: format!("{:.6}", item.coordinates.latitude),
            longitude: format!("{:.6}", item.coordinates.longitude),
            severity: format!("{:?}", item.severity),
            progress: format!("{}%", item.progress),
            distance: Distance::new(item.distance, unit).to_string(),
        }
    }
}

/// Output for check command
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub total: usize,
    pub invalid: usize,
    pub problems: Vec<CheckProblem>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct CheckProblem {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Problem")]
    pub reason: String,
}

/// One row of the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    #[tabled(display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}
