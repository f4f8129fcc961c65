use crate::cli::NearbyArgs;
use crate::config_loader::load_config_with_overrides;
use crate::geojson_export::to_feature_collection;
use crate::output::OutputWriter;
use crate::output_types::{NearbyItem, NearbyOutput, NearbyRow};
use anyhow::{bail, Context, Result};
use cleanmap_core::config::CliConfigOverrides;
use cleanmap_core::models::{Coordinates, Distance, PollutedLocation};
use cleanmap_geo::{ensure_valid, ranked_by_distance, screen_locations, within_distance};
use std::path::Path;

pub fn execute(args: NearbyArgs, output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config_with_overrides(
        config_path,
        CliConfigOverrides {
            distance_unit: args.unit,
            validity: args.validity,
            limit: args.limit,
        },
    )?;
    let unit = config.distance_unit.value;

    let reference =
        ensure_valid(Coordinates::new(args.lat, args.lon)).context("Invalid reference point")?;

    let within = match args.within {
        Some(value) if !value.is_finite() || value < 0.0 => {
            bail!("--within must be a non-negative number, got {}", value)
        }
        Some(value) => Some(Distance::new(value, unit)),
        None => None,
    };

    let locations = PollutedLocation::load_all(&args.file)
        .with_context(|| format!("Failed to load locations from {}", args.file.display()))?;
    let screened = screen_locations(locations, config.validity.value)
        .context("Location file contains invalid coordinates")?;

    if screened.skipped > 0 {
        output.warning(format!(
            "Skipped {} location(s) with invalid coordinates",
            screened.skipped
        ));
    }

    let mut ranked = match within {
        Some(max) => within_distance(reference, &screened.locations, max),
        None => ranked_by_distance(reference, &screened.locations),
    };
    if let Some(limit) = config.limit.value {
        ranked.truncate(limit);
    }

    tracing::debug!(
        matches = ranked.len(),
        total = screened.locations.len(),
        "Ordered locations by distance"
    );

    let results: Vec<NearbyItem> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| NearbyItem::from_ranked(i + 1, r, unit))
        .collect();

    if args.geojson {
        output.data(&to_feature_collection(&results))?;
    } else if output.is_json() {
        output.result(NearbyOutput {
            reference,
            unit,
            within,
            skipped: screened.skipped,
            results,
        })?;
    } else {
        output.section(format!("Locations nearest to {}", reference));
        if let Some(max) = within {
            output.kv("Within", max);
        }
        let rows: Vec<NearbyRow> = results.iter().map(|item| NearbyRow::new(item, unit)).collect();
        output.table(rows);
    }

    Ok(())
}
