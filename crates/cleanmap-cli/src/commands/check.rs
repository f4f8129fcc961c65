use crate::cli::CheckArgs;
use crate::output::OutputWriter;
use crate::output_types::{CheckOutput, CheckProblem};
use anyhow::{bail, Context, Result};
use cleanmap_core::models::PollutedLocation;
use cleanmap_geo::validation::{count_invalid_locations, validate_coordinates};

pub fn execute(args: CheckArgs, output: &OutputWriter) -> Result<()> {
    let locations = PollutedLocation::load_all(&args.file)
        .with_context(|| format!("Failed to load locations from {}", args.file.display()))?;

    let invalid = count_invalid_locations(&locations);
    let problems: Vec<CheckProblem> = locations
        .iter()
        .flat_map(|location| {
            validate_coordinates(&location.coordinates).errors.into_iter().map(move |error| {
                CheckProblem {
                    id: location.id.to_string(),
                    field: error.location,
                    reason: error.reason,
                }
            })
        })
        .collect();

    let total = locations.len();
    let summary = CheckOutput { total, invalid, problems };

    if output.is_json() {
        output.result(summary)?;
    } else if summary.invalid == 0 {
        output.success(format!("All {} locations have valid coordinates", summary.total));
    } else {
        output.table(summary.problems);
    }

    if invalid > 0 {
        bail!("{} of {} locations have invalid coordinates", invalid, total);
    }

    Ok(())
}
