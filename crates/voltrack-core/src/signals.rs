//! Trading signal classification and filtering.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::{Signal, ValidationError};

/// Direction read from the free-form signal type by case-insensitive
/// substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

/// Display tier on signal strength. Bounds are inclusive and checked
/// top-down, the same pattern as HAR fit quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Strong,
    Moderate,
    Weak,
}

impl StrengthTier {
    pub fn from_strength(strength: f64) -> Self {
        if strength >= defaults::STRONG_SIGNAL_THRESHOLD {
            Self::Strong
        } else if strength >= defaults::MODERATE_SIGNAL_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl Display for StrengthTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Signal {
    pub fn direction(&self) -> SignalDirection {
        let lowered = self.signal_type.to_ascii_lowercase();
        if lowered.contains("buy") {
            SignalDirection::Buy
        } else if lowered.contains("sell") {
            SignalDirection::Sell
        } else {
            SignalDirection::Neutral
        }
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_strength(self.strength)
    }

    pub fn is_strong(&self) -> bool {
        self.strength >= defaults::STRONG_SIGNAL_THRESHOLD
    }
}

/// Selection applied to a signal list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalFilter {
    #[default]
    All,
    Buy,
    Sell,
    Strong,
}

impl SignalFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Strong => "strong",
        }
    }
}

impl Display for SignalFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalFilter {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "strong" => Ok(Self::Strong),
            other => Err(ValidationError::InvalidFilter {
                value: other.to_owned(),
            }),
        }
    }
}

/// Pure projection of the input list; result order is input order and the
/// input is never reordered or mutated.
pub fn filter_signals(signals: &[Signal], filter: SignalFilter) -> Vec<Signal> {
    signals
        .iter()
        .filter(|signal| match filter {
            SignalFilter::All => true,
            SignalFilter::Buy => signal.direction() == SignalDirection::Buy,
            SignalFilter::Sell => signal.direction() == SignalDirection::Sell,
            SignalFilter::Strong => signal.is_strong(),
        })
        .cloned()
        .collect()
}

/// Headline counts shown beneath the signal table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub buy: usize,
    pub sell: usize,
    pub strong: usize,
}

pub fn summarize(signals: &[Signal]) -> SignalSummary {
    let mut summary = SignalSummary::default();
    for signal in signals {
        match signal.direction() {
            SignalDirection::Buy => summary.buy += 1,
            SignalDirection::Sell => summary.sell += 1,
            SignalDirection::Neutral => {}
        }
        if signal.is_strong() {
            summary.strong += 1;
        }
    }
    summary
}
