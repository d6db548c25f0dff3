//! # Fraction Formatting Module
//!
//! Renders decimal quantities the way a cook reads them: as the nearest
//! common kitchen fraction when one is close enough, as a reduced fraction
//! found by a bounded denominator search otherwise, and as a short decimal
//! when nothing fits.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::fraction_format::to_fraction;
//!
//! assert_eq!(to_fraction(0.5), "1/2");
//! assert_eq!(to_fraction(0.333), "1/3");
//! assert_eq!(to_fraction(0.1), "1/10");
//! ```

use log::trace;
use num_integer::Integer;

use crate::config::FractionConfig;

/// A fraction commonly found in recipes, with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonFraction {
    pub numerator: u32,
    pub denominator: u32,
    pub label: &'static str,
}

impl CommonFraction {
    const fn new(numerator: u32, denominator: u32, label: &'static str) -> Self {
        Self {
            numerator,
            denominator,
            label,
        }
    }

    /// Decimal value of the fraction
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

/// Common cooking fractions, in lookup order: eighths, thirds, fifths, sixths
pub const COMMON_FRACTIONS: [CommonFraction; 15] = [
    CommonFraction::new(1, 8, "1/8"),
    CommonFraction::new(1, 4, "1/4"),
    CommonFraction::new(3, 8, "3/8"),
    CommonFraction::new(1, 2, "1/2"),
    CommonFraction::new(5, 8, "5/8"),
    CommonFraction::new(3, 4, "3/4"),
    CommonFraction::new(7, 8, "7/8"),
    CommonFraction::new(1, 3, "1/3"),
    CommonFraction::new(2, 3, "2/3"),
    CommonFraction::new(1, 5, "1/5"),
    CommonFraction::new(2, 5, "2/5"),
    CommonFraction::new(3, 5, "3/5"),
    CommonFraction::new(4, 5, "4/5"),
    CommonFraction::new(1, 6, "1/6"),
    CommonFraction::new(5, 6, "5/6"),
];

/// Fraction formatter with a configurable tolerance and search range
#[derive(Debug, Clone, Default)]
pub struct FractionFormatter {
    config: FractionConfig,
}

impl FractionFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FractionConfig {
        &self.config
    }

    /// Format a decimal as a fraction string
    ///
    /// Tries the [`COMMON_FRACTIONS`] table first, then searches every
    /// denominator from 2 up to the configured maximum for the closest
    /// fraction. Falls back to [`FractionFormatter::format_decimal`] when no
    /// candidate lies within tolerance.
    pub fn to_fraction(&self, decimal: f64) -> String {
        let tolerance = self.config.tolerance;

        if let Some(common) = COMMON_FRACTIONS
            .iter()
            .find(|f| (decimal - f.value()).abs() < tolerance)
        {
            trace!("Matched {} to common fraction {}", decimal, common.label);
            return common.label.to_string();
        }

        if let Some((numerator, denominator)) = self.best_denominator(decimal) {
            let divisor = numerator.gcd(&denominator);
            let (numerator, denominator) = (numerator / divisor, denominator / divisor);

            if let Some(common) = COMMON_FRACTIONS
                .iter()
                .find(|f| i64::from(f.numerator) == numerator && i64::from(f.denominator) == denominator)
            {
                return common.label.to_string();
            }

            trace!("Matched {} to searched fraction {}/{}", decimal, numerator, denominator);
            return format!("{numerator}/{denominator}");
        }

        trace!("No fraction within tolerance for {}, using decimal", decimal);
        self.format_decimal(decimal)
    }

    /// Closest fraction over the denominator range, if within tolerance
    ///
    /// Values within tolerance of zero pick a zero numerator, which reduces
    /// to "0/1".
    fn best_denominator(&self, decimal: f64) -> Option<(i64, i64)> {
        if !decimal.is_finite() {
            return None;
        }

        let mut best: Option<(i64, i64, f64)> = None;
        for denominator in 2..=i64::from(self.config.max_denominator) {
            let numerator = (decimal * denominator as f64).round();
            let error = (decimal - numerator / denominator as f64).abs();
            if best.map_or(true, |(_, _, best_error)| error < best_error) {
                best = Some((numerator as i64, denominator, error));
            }
        }

        best.filter(|&(_, _, error)| error < self.config.tolerance)
            .map(|(numerator, denominator, _)| (numerator, denominator))
    }

    /// Round to the configured decimal places, dropping trailing zeros and point
    pub fn format_decimal(&self, value: f64) -> String {
        round_and_trim(value, self.config.decimal_places)
    }
}

/// Format a decimal as a fraction using the default configuration
pub fn to_fraction(decimal: f64) -> String {
    FractionFormatter::new().to_fraction(decimal)
}

/// Round to two decimals and strip trailing zeros and a trailing point
///
/// ```rust
/// use pantry_recipes::fraction_format::format_decimal;
///
/// assert_eq!(format_decimal(2.5), "2.5");
/// assert_eq!(format_decimal(2.0), "2");
/// assert_eq!(format_decimal(1.23456), "1.23");
/// ```
pub fn format_decimal(value: f64) -> String {
    round_and_trim(value, crate::config::DEFAULT_DECIMAL_PLACES)
}

fn round_and_trim(value: f64, decimal_places: u32) -> String {
    let factor = 10f64.powi(decimal_places as i32);
    let rounded = (value * factor).round() / factor;
    // -0 renders as "0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let text = format!("{:.*}", decimal_places as usize, rounded);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
