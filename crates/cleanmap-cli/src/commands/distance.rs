use crate::cli::DistanceArgs;
use crate::config_loader::load_config_with_overrides;
use crate::output::OutputWriter;
use crate::output_types::DistanceOutput;
use anyhow::{Context, Result};
use cleanmap_core::config::CliConfigOverrides;
use cleanmap_core::models::{Coordinates, Distance};
use cleanmap_geo::{ensure_valid, haversine_distance};
use std::path::Path;

pub fn execute(args: DistanceArgs, output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config_with_overrides(
        config_path,
        CliConfigOverrides { distance_unit: args.unit, ..Default::default() },
    )?;
    let unit = config.distance_unit.value;

    // Both points are always checked strictly
    let from = ensure_valid(Coordinates::new(args.lat1, args.lon1)).context("Invalid first point")?;
    let to = ensure_valid(Coordinates::new(args.lat2, args.lon2)).context("Invalid second point")?;

    let distance = Distance::meters(haversine_distance(from, to)).convert(unit);

    if output.is_json() {
        output.result(DistanceOutput { from, to, distance: distance.value, unit })?;
    } else {
        output.kv("From", from);
        output.kv("To", to);
        output.kv("Distance", distance);
    }

    Ok(())
}
