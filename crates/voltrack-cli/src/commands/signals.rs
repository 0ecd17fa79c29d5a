use serde_json::{json, Value};

use voltrack_core::Snapshot;

use crate::cli::SignalsArgs;
use crate::error::CliError;

pub fn run(args: &SignalsArgs, snapshot: &Snapshot) -> Result<Value, CliError> {
    let filter = args.filter.into();
    let filtered = voltrack_core::filter_signals(&snapshot.signals, filter);

    let tiers = filtered
        .iter()
        .map(|signal| signal.tier())
        .collect::<Vec<_>>();

    Ok(json!({
        "filter": filter,
        "signals": filtered,
        "tiers": tiers,
        "summary": voltrack_core::summarize(&snapshot.signals),
    }))
}
