//! # Quantity Scaler
//!
//! Scales the leading quantity of an ingredient amount ("1 1/2 cups", "2",
//! "0.5 tsp") by a serving ratio and renders the result for display, keeping
//! the unit text that follows the number.
//!
//! ## Features
//!
//! - Mixed numbers, simple fractions, decimals and integers
//! - Results below one rendered as kitchen fractions ("1/3 cup")
//! - Other results rendered as trimmed two-decimal numbers ("2.25 cups")
//! - Amounts without a leading number are returned untouched
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::quantity_scaler::scale_amount;
//!
//! assert_eq!(scale_amount(Some("1 1/2 cups"), 2.0), "3 cups");
//! assert_eq!(scale_amount(Some("1/2 tsp"), 0.5), "1/4 tsp");
//! assert_eq!(scale_amount(Some("a pinch"), 2.0), "a pinch");
//! ```

use log::{debug, trace};

use crate::config::ServingsConfig;
use crate::fraction_format::FractionFormatter;
use crate::quantity_patterns::{DECIMAL_REGEX, INTEGER_REGEX, MIXED_NUMBER_REGEX, SIMPLE_FRACTION_REGEX};

/// The leading numeric token recognised in an amount string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityToken {
    /// Whole number plus fraction (e.g., "1 1/2")
    Mixed {
        whole: f64,
        numerator: f64,
        denominator: f64,
    },
    /// Simple fraction (e.g., "3/4")
    Fraction { numerator: f64, denominator: f64 },
    /// Decimal number (e.g., "0.5")
    Decimal(f64),
    /// Plain integer (e.g., "2")
    Integer(f64),
}

impl QuantityToken {
    /// Numeric value of the token
    pub fn value(&self) -> f64 {
        match *self {
            QuantityToken::Mixed {
                whole,
                numerator,
                denominator,
            } => whole + numerator / denominator,
            QuantityToken::Fraction {
                numerator,
                denominator,
            } => numerator / denominator,
            QuantityToken::Decimal(value) | QuantityToken::Integer(value) => value,
        }
    }
}

/// An amount string split into its leading quantity and unit text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAmount {
    pub token: QuantityToken,
    /// Text after the quantity, trimmed (may be empty)
    pub unit: String,
}

impl ParsedAmount {
    pub fn value(&self) -> f64 {
        self.token.value()
    }
}

/// Parse the leading quantity of an amount string
///
/// Patterns are tried in priority order (mixed number, simple fraction,
/// decimal, integer) so that "1/2" is never read as the integer "1".
/// Returns `None` when the trimmed text does not start with a number or the
/// fraction has a zero denominator.
///
/// # Examples
///
/// ```rust
/// use pantry_recipes::quantity_scaler::parse_amount;
///
/// let parsed = parse_amount("2 1/4 cups flour").unwrap();
/// assert_eq!(parsed.value(), 2.25);
/// assert_eq!(parsed.unit, "cups flour");
///
/// assert!(parse_amount("salt to taste").is_none());
/// ```
pub fn parse_amount(amount: &str) -> Option<ParsedAmount> {
    let text = amount.trim();

    let (token, consumed) = if let Some(caps) = MIXED_NUMBER_REGEX.captures(text) {
        let token = QuantityToken::Mixed {
            whole: caps[1].parse().ok()?,
            numerator: caps[2].parse().ok()?,
            denominator: nonzero(caps[3].parse().ok()?)?,
        };
        (token, caps[0].len())
    } else if let Some(caps) = SIMPLE_FRACTION_REGEX.captures(text) {
        let token = QuantityToken::Fraction {
            numerator: caps[1].parse().ok()?,
            denominator: nonzero(caps[2].parse().ok()?)?,
        };
        (token, caps[0].len())
    } else if let Some(m) = DECIMAL_REGEX.find(text) {
        (QuantityToken::Decimal(m.as_str().parse().ok()?), m.end())
    } else if let Some(m) = INTEGER_REGEX.find(text) {
        (QuantityToken::Integer(m.as_str().parse().ok()?), m.end())
    } else {
        trace!("No leading quantity in '{}'", text);
        return None;
    };

    let unit = text[consumed..].trim().to_string();
    trace!("Parsed '{}' as {:?} with unit '{}'", text, token, unit);
    Some(ParsedAmount { token, unit })
}

fn nonzero(denominator: f64) -> Option<f64> {
    (denominator != 0.0).then_some(denominator)
}

/// Scales ingredient amounts, rendering results with a [`FractionFormatter`]
#[derive(Debug, Clone, Default)]
pub struct QuantityScaler {
    formatter: FractionFormatter,
}

impl QuantityScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(formatter: FractionFormatter) -> Self {
        Self { formatter }
    }

    /// Scale the leading quantity of `amount` by `scale_factor`
    ///
    /// Missing or empty amounts give an empty string. Amounts without a
    /// leading number, and scale factors that produce a non-finite value,
    /// give the input back unchanged.
    pub fn scale_amount(&self, amount: Option<&str>, scale_factor: f64) -> String {
        let Some(amount) = amount else {
            return String::new();
        };
        if amount.is_empty() {
            return String::new();
        }

        let Some(parsed) = parse_amount(amount) else {
            return amount.to_string();
        };

        let scaled = parsed.value() * scale_factor;
        if !scaled.is_finite() {
            debug!(
                "Scaling '{}' by {} is not finite, keeping original",
                amount, scale_factor
            );
            return amount.to_string();
        }

        // Exactly 1 stays on the decimal branch: "1", never "1/1"
        let quantity = if scaled > 0.0 && scaled < 1.0 {
            self.formatter.to_fraction(scaled)
        } else {
            self.formatter.format_decimal(scaled)
        };

        let result = if parsed.unit.is_empty() {
            quantity
        } else {
            format!("{} {}", quantity, parsed.unit)
        };
        trace!("Scaled '{}' by {} -> '{}'", amount, scale_factor, result);
        result
    }
}

/// Scale an amount string using the default fraction settings
pub fn scale_amount(amount: Option<&str>, scale_factor: f64) -> String {
    QuantityScaler::new().scale_amount(amount, scale_factor)
}

/// Ratio between the desired and original servings
///
/// The desired servings are clamped to the servings control's range; a
/// recipe without a positive serving count is treated as serving one.
///
/// ```rust
/// use pantry_recipes::config::ServingsConfig;
/// use pantry_recipes::quantity_scaler::scale_factor;
///
/// let servings = ServingsConfig::default();
/// assert_eq!(scale_factor(8, Some(4), &servings), 2.0);
/// assert_eq!(scale_factor(50, Some(10), &servings), 2.0);
/// assert_eq!(scale_factor(3, None, &servings), 3.0);
/// ```
pub fn scale_factor(desired_servings: u32, original_servings: Option<u32>, servings: &ServingsConfig) -> f64 {
    let desired = servings.clamp(desired_servings);
    let original = original_servings.filter(|&s| s > 0).unwrap_or(1);
    f64::from(desired) / f64::from(original)
}
