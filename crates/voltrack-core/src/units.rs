//! Volatility unit canonicalization.
//!
//! Upstream sources disagree on whether a volatility figure is a decimal
//! fraction (0.18) or a percentage (18). Anything above 1 is read as a
//! percentage; the behavior at exactly 1 is an upstream ambiguity, so it
//! is a [`UnitConvention`] option instead of a hard-coded choice.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Tie-break applied when a raw volatility figure is exactly 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitConvention {
    /// 1 means 100% volatility, already a fraction. Default.
    #[default]
    FractionAtOne,
    /// 1 means 1%, divide by 100.
    PercentAtOne,
}

impl UnitConvention {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FractionAtOne => "fraction-at-one",
            Self::PercentAtOne => "percent-at-one",
        }
    }
}

impl Display for UnitConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitConvention {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fraction-at-one" => Ok(Self::FractionAtOne),
            "percent-at-one" => Ok(Self::PercentAtOne),
            other => Err(ValidationError::InvalidConvention {
                value: other.to_owned(),
            }),
        }
    }
}

/// Canonicalize a volatility figure to a decimal fraction under the
/// default convention.
///
/// Non-finite and negative inputs clamp to 0 so corrupt upstream data
/// degrades one metric instead of poisoning downstream pricing math.
pub fn normalize_volatility(raw: f64) -> f64 {
    normalize_volatility_with(raw, UnitConvention::default())
}

/// Canonicalize a volatility figure under an explicit tie-break convention.
pub fn normalize_volatility_with(raw: f64, convention: UnitConvention) -> f64 {
    if !raw.is_finite() || raw < 0.0 {
        return 0.0;
    }

    let is_percent = match convention {
        UnitConvention::FractionAtOne => raw > 1.0,
        UnitConvention::PercentAtOne => raw >= 1.0,
    };

    if is_percent {
        raw / 100.0
    } else {
        raw
    }
}

/// Clamp a non-negative upstream figure without rescaling it.
///
/// Used at ingestion so literal figures (ATR in index points, percent-scale
/// realized volatility) survive verbatim for display.
pub fn sanitize(raw: f64) -> f64 {
    if raw.is_finite() && raw >= 0.0 {
        raw
    } else {
        0.0
    }
}

/// Clamp a signed upstream figure (price change, change percent).
pub fn sanitize_signed(raw: f64) -> f64 {
    if raw.is_finite() {
        raw
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_percentages_by_one_hundred() {
        assert_eq!(normalize_volatility(18.0), 0.18);
        assert_eq!(normalize_volatility(1.5786), 0.015786);
    }

    #[test]
    fn passes_fractions_through() {
        assert_eq!(normalize_volatility(0.18), 0.18);
        assert_eq!(normalize_volatility(0.0), 0.0);
    }

    #[test]
    fn one_is_a_fraction_under_the_default_tie_break() {
        assert_eq!(normalize_volatility(1.0), 1.0);
        assert_eq!(
            normalize_volatility_with(1.0, UnitConvention::PercentAtOne),
            0.01
        );
    }

    #[test]
    fn clamps_negative_and_non_finite_to_zero() {
        assert_eq!(normalize_volatility(-0.2), 0.0);
        assert_eq!(normalize_volatility(f64::NAN), 0.0);
        assert_eq!(normalize_volatility(f64::INFINITY), 0.0);
        assert_eq!(normalize_volatility(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn sanitize_preserves_scale() {
        assert_eq!(sanitize(29.23), 29.23);
        assert_eq!(sanitize(-1.0), 0.0);
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize_signed(-5.5), -5.5);
        assert_eq!(sanitize_signed(f64::NAN), 0.0);
    }

    #[test]
    fn parses_convention_names() {
        let convention = "percent-at-one"
            .parse::<UnitConvention>()
            .expect("must parse");
        assert_eq!(convention, UnitConvention::PercentAtOne);

        let err = "always".parse::<UnitConvention>().expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidConvention { .. }));
    }
}
