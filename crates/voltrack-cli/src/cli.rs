//! CLI argument definitions for voltrack.
//!
//! The binary reads one raw payload document (a bare primary payload or a
//! `{ "primary": ..., "analysis": ... }` document) from `--input` or stdin
//! and renders a derived view of it. It performs no networking; feeding it
//! is the poll loop's job.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use voltrack_core::{SignalFilter, UnitConvention};

/// Volatility tracker core, exposed on the command line.
#[derive(Debug, Parser)]
#[command(
    name = "voltrack",
    author,
    version,
    about = "Reconcile market/volatility payloads and derive forecasts and price bands"
)]
pub struct Cli {
    /// Path to the raw payload JSON document; stdin when omitted.
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Tie-break when a raw volatility figure is exactly 1.
    #[arg(long, global = true, value_enum, default_value_t = ConventionSelector::FractionAtOne)]
    pub convention: ConventionSelector,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConventionSelector {
    FractionAtOne,
    PercentAtOne,
}

impl From<ConventionSelector> for UnitConvention {
    fn from(selector: ConventionSelector) -> Self {
        match selector {
            ConventionSelector::FractionAtOne => UnitConvention::FractionAtOne,
            ConventionSelector::PercentAtOne => UnitConvention::PercentAtOne,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile the payload into the canonical snapshot.
    Snapshot,
    /// Evaluate the HAR model: forecasts, fit quality, dominant horizon.
    Har,
    /// Derive confidence-interval price ranges.
    Ranges(RangesArgs),
    /// Classify and filter trading signals.
    Signals(SignalsArgs),
}

#[derive(Debug, Args)]
pub struct RangesArgs {
    /// Project one custom range instead of the standard ladder.
    #[arg(long, requires = "horizon_days", requires = "base_price")]
    pub vol: Option<f64>,

    /// Horizon in trading days; fractional values are allowed.
    #[arg(long)]
    pub horizon_days: Option<f64>,

    /// Base price the band is anchored at.
    #[arg(long)]
    pub base_price: Option<f64>,

    /// Annotate the historical series with per-point bands.
    #[arg(long, default_value_t = false)]
    pub bands: bool,
}

#[derive(Debug, Args)]
pub struct SignalsArgs {
    /// Subset of signals to show.
    #[arg(long, value_enum, default_value_t = FilterSelector::All)]
    pub filter: FilterSelector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterSelector {
    All,
    Buy,
    Sell,
    Strong,
}

impl From<FilterSelector> for SignalFilter {
    fn from(selector: FilterSelector) -> Self {
        match selector {
            FilterSelector::All => SignalFilter::All,
            FilterSelector::Buy => SignalFilter::Buy,
            FilterSelector::Sell => SignalFilter::Sell,
            FilterSelector::Strong => SignalFilter::Strong,
        }
    }
}
