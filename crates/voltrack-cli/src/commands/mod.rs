mod har;
mod ranges;
mod signals;
mod snapshot;

use std::io::Read;

use serde_json::Value;

use voltrack_core::{RawFeed, Snapshot};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::report::Report;

pub fn run(cli: &Cli) -> Result<Report<Value>, CliError> {
    let feed = load_feed(cli)?;
    let snapshot = voltrack_core::reconcile(&feed);

    let data = match &cli.command {
        Command::Snapshot => snapshot::run(&snapshot)?,
        Command::Har => har::run(&snapshot)?,
        Command::Ranges(args) => ranges::run(args, &snapshot, cli.convention.into())?,
        Command::Signals(args) => signals::run(args, &snapshot)?,
    };

    let mut report = Report::new(data);
    if uses_default_volatility(&snapshot) {
        report = report.with_warning(
            "volatility indicators were absent upstream; literal defaults are in effect",
        );
    }

    Ok(report)
}

fn load_feed(cli: &Cli) -> Result<RawFeed, CliError> {
    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if raw.trim().is_empty() {
        return Err(CliError::Command(String::from(
            "payload document is empty; pass --input or pipe JSON on stdin",
        )));
    }

    Ok(RawFeed::from_json(&raw)?)
}

fn uses_default_volatility(snapshot: &Snapshot) -> bool {
    snapshot.volatility.realized_volatility == voltrack_core::defaults::REALIZED_VOLATILITY
        && snapshot.volatility.garch_forecast == voltrack_core::defaults::GARCH_FORECAST
}
