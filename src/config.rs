//! # Configuration Module
//!
//! This module defines configuration structures for quantity scaling,
//! fraction formatting and preference parsing, along with the environment
//! overrides read by the command-line front end.

use std::env;
use std::str::FromStr;

use log::debug;

use crate::errors::RecipeToolError;

// Constants for fraction formatting
pub const DEFAULT_FRACTION_TOLERANCE: f64 = 0.001;
pub const DEFAULT_MAX_DENOMINATOR: u32 = 64;
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

// Constants for the servings control
pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 20;

// Constants for recipe generation requests
pub const MIN_RECIPE_COUNT: u32 = 1;
pub const MAX_RECIPE_COUNT: u32 = 20;
pub const DEFAULT_RECIPE_COUNT: u32 = 3;

/// Fraction formatter settings
#[derive(Debug, Clone, PartialEq)]
pub struct FractionConfig {
    /// Maximum distance between a decimal and a candidate fraction
    pub tolerance: f64,
    /// Largest denominator tried by the best-denominator search
    pub max_denominator: u32,
    /// Decimal places kept when no fraction fits
    pub decimal_places: u32,
}

impl Default for FractionConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_FRACTION_TOLERANCE,
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Bounds of the user-adjustable servings control
#[derive(Debug, Clone, PartialEq)]
pub struct ServingsConfig {
    pub min_servings: u32,
    pub max_servings: u32,
}

impl Default for ServingsConfig {
    fn default() -> Self {
        Self {
            min_servings: MIN_SERVINGS,
            max_servings: MAX_SERVINGS,
        }
    }
}

impl ServingsConfig {
    /// Clamp a requested servings value into the control's range
    pub fn clamp(&self, servings: u32) -> u32 {
        servings.clamp(self.min_servings, self.max_servings)
    }
}

/// Recipe-count bounds used by the preference parser and generation requests
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceConfig {
    /// Smallest accepted count override (inclusive)
    pub min_count: u32,
    /// Largest accepted count override (inclusive)
    pub max_count: u32,
    /// Count used when the user gives none
    pub default_count: u32,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            min_count: MIN_RECIPE_COUNT,
            max_count: MAX_RECIPE_COUNT,
            default_count: DEFAULT_RECIPE_COUNT,
        }
    }
}

impl PreferenceConfig {
    /// Whether a count lies inside the accepted range
    pub fn accepts(&self, count: u32) -> bool {
        (self.min_count..=self.max_count).contains(&count)
    }
}

/// Aggregated configuration for the whole toolkit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolConfig {
    pub fraction: FractionConfig,
    pub servings: ServingsConfig,
    pub preference: PreferenceConfig,
}

impl ToolConfig {
    /// Build a configuration from defaults plus `PANTRY_*` environment overrides
    ///
    /// Unset variables keep their defaults; set but unparseable or
    /// inconsistent values are reported as [`RecipeToolError::Config`].
    pub fn from_env() -> Result<Self, RecipeToolError> {
        let mut config = Self::default();

        if let Some(tolerance) = read_var::<f64>("PANTRY_FRACTION_TOLERANCE")? {
            if !(tolerance > 0.0 && tolerance < 1.0) {
                return Err(RecipeToolError::Config(format!(
                    "PANTRY_FRACTION_TOLERANCE must be in (0, 1), got {tolerance}"
                )));
            }
            config.fraction.tolerance = tolerance;
        }
        if let Some(max_den) = read_var::<u32>("PANTRY_MAX_DENOMINATOR")? {
            if max_den < 2 {
                return Err(RecipeToolError::Config(format!(
                    "PANTRY_MAX_DENOMINATOR must be at least 2, got {max_den}"
                )));
            }
            config.fraction.max_denominator = max_den;
        }
        if let Some(max_servings) = read_var::<u32>("PANTRY_MAX_SERVINGS")? {
            if max_servings < config.servings.min_servings {
                return Err(RecipeToolError::Config(format!(
                    "PANTRY_MAX_SERVINGS must be at least {}, got {max_servings}",
                    config.servings.min_servings
                )));
            }
            config.servings.max_servings = max_servings;
        }
        if let Some(max_count) = read_var::<u32>("PANTRY_MAX_RECIPE_COUNT")? {
            if max_count < config.preference.min_count {
                return Err(RecipeToolError::Config(format!(
                    "PANTRY_MAX_RECIPE_COUNT must be at least {}, got {max_count}",
                    config.preference.min_count
                )));
            }
            config.preference.max_count = max_count;
        }
        if let Some(default_count) = read_var::<u32>("PANTRY_DEFAULT_RECIPE_COUNT")? {
            config.preference.default_count = default_count;
        }
        // Checked after all overrides: a lowered maximum can exclude the built-in default
        if !config.preference.accepts(config.preference.default_count) {
            return Err(RecipeToolError::Config(format!(
                "default recipe count {} is outside {}..={}; set PANTRY_DEFAULT_RECIPE_COUNT",
                config.preference.default_count, config.preference.min_count, config.preference.max_count
            )));
        }

        debug!("Loaded tool configuration: {:?}", config);
        Ok(config)
    }
}

fn read_var<T: FromStr>(name: &str) -> Result<Option<T>, RecipeToolError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| RecipeToolError::Config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ui_bounds() {
        let config = ToolConfig::default();
        assert_eq!(config.fraction.tolerance, 0.001);
        assert_eq!(config.fraction.max_denominator, 64);
        assert_eq!(config.servings.max_servings, 20);
        assert_eq!(config.preference.max_count, 20);
    }

    #[test]
    fn test_servings_clamp() {
        let servings = ServingsConfig::default();
        assert_eq!(servings.clamp(0), 1);
        assert_eq!(servings.clamp(8), 8);
        assert_eq!(servings.clamp(45), 20);
    }

    #[test]
    fn test_preference_accepts_inclusive_bounds() {
        let preference = PreferenceConfig::default();
        assert!(preference.accepts(1));
        assert!(preference.accepts(20));
        assert!(!preference.accepts(0));
        assert!(!preference.accepts(21));
    }
}
