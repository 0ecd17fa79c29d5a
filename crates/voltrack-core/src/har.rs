//! HAR forecast evaluation.
//!
//! The model is already fitted upstream; this module only reads the
//! parameter set: multi-horizon forecasts, a fit-quality bucket from the
//! regression R², and which horizon's coefficient dominates. Every
//! function here is total over finite inputs.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::units::sanitize;
use crate::HarParams;

/// Fit-quality bucket on the regression R².
///
/// Bounds are inclusive and checked top-down, so 0.8 is excellent and
/// 0.7999 is good. Out-of-range R² still lands in a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl FitQuality {
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= 0.8 {
            Self::Excellent
        } else if r_squared >= 0.6 {
            Self::Good
        } else if r_squared >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl Display for FitQuality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which realized-volatility window carries the most predictive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DominantHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl DominantHorizon {
    /// Monthly must beat both shorter windows for long-term dominance;
    /// weekly only needs to beat daily for medium-term.
    pub fn classify(daily: f64, weekly: f64, monthly: f64) -> Self {
        if monthly > weekly && monthly > daily {
            Self::LongTerm
        } else if weekly > daily {
            Self::MediumTerm
        } else {
            Self::ShortTerm
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShortTerm => "short-term",
            Self::MediumTerm => "medium-term",
            Self::LongTerm => "long-term",
        }
    }
}

impl Display for DominantHorizon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volatility forecasts at the three HAR horizons (decimal fractions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarForecasts {
    #[serde(rename = "1d")]
    pub one_day: f64,
    #[serde(rename = "5d")]
    pub five_day: f64,
    #[serde(rename = "22d")]
    pub twenty_two_day: f64,
}

/// Result of evaluating a fitted HAR parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarEvaluation {
    pub forecasts: HarForecasts,
    pub fit_quality: FitQuality,
    pub dominant_horizon: DominantHorizon,
}

/// Evaluate a fitted parameter set. Pure and deterministic; never fails
/// on any finite input.
pub fn evaluate(params: &HarParams) -> HarEvaluation {
    HarEvaluation {
        forecasts: HarForecasts {
            one_day: sanitize(params.forecast_1d),
            five_day: sanitize(params.forecast_5d),
            twenty_two_day: sanitize(params.forecast_22d),
        },
        fit_quality: FitQuality::from_r_squared(params.r_squared),
        dominant_horizon: DominantHorizon::classify(params.daily, params.weekly, params.monthly),
    }
}
