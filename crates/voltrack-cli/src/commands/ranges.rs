use serde_json::{json, Value};

use voltrack_core::{projection, Snapshot, UnitConvention};

use crate::cli::RangesArgs;
use crate::error::CliError;

pub fn run(
    args: &RangesArgs,
    snapshot: &Snapshot,
    convention: UnitConvention,
) -> Result<Value, CliError> {
    if let Some(vol) = args.vol {
        let horizon_days = args
            .horizon_days
            .ok_or_else(|| CliError::Command(String::from("--vol requires --horizon-days")))?;
        let base_price = args
            .base_price
            .ok_or_else(|| CliError::Command(String::from("--vol requires --base-price")))?;

        if !(horizon_days.is_finite() && horizon_days > 0.0) {
            return Err(CliError::Command(String::from(
                "--horizon-days must be a positive number",
            )));
        }

        let range = projection::project_range_with(vol, horizon_days, base_price, convention);
        return Ok(json!({ "range": range }));
    }

    let ladder = projection::range_ladder(snapshot);
    let mut result = json!({ "ladder": ladder });

    if args.bands {
        result["bands"] = serde_json::to_value(projection::annotate_bands(&snapshot.historical))?;
        result["bandAccuracy"] = json!(projection::band_accuracy(&snapshot.historical));
    }

    Ok(result)
}
