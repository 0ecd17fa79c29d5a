use serde_json::{json, Value};

use voltrack_core::Snapshot;

use crate::error::CliError;

pub fn run(snapshot: &Snapshot) -> Result<Value, CliError> {
    let evaluation = voltrack_core::har::evaluate(&snapshot.har);

    Ok(json!({
        "params": snapshot.har,
        "evaluation": evaluation,
    }))
}
