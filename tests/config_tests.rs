//! # Configuration Tests
//!
//! Environment overrides are process-wide, so every case lives in a single
//! test to keep them from racing.

use pantry_recipes::config::ToolConfig;
use pantry_recipes::errors::RecipeToolError;
use std::env;

const VARS: [&str; 5] = [
    "PANTRY_FRACTION_TOLERANCE",
    "PANTRY_MAX_DENOMINATOR",
    "PANTRY_MAX_SERVINGS",
    "PANTRY_MAX_RECIPE_COUNT",
    "PANTRY_DEFAULT_RECIPE_COUNT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_overrides() {
    clear_vars();
    assert_eq!(ToolConfig::from_env().unwrap(), ToolConfig::default());

    env::set_var("PANTRY_FRACTION_TOLERANCE", "0.01");
    env::set_var("PANTRY_MAX_DENOMINATOR", "16");
    env::set_var("PANTRY_MAX_SERVINGS", "12");
    env::set_var("PANTRY_MAX_RECIPE_COUNT", "10");
    env::set_var("PANTRY_DEFAULT_RECIPE_COUNT", "4");
    let config = ToolConfig::from_env().unwrap();
    assert_eq!(config.fraction.tolerance, 0.01);
    assert_eq!(config.fraction.max_denominator, 16);
    assert_eq!(config.servings.max_servings, 12);
    assert_eq!(config.preference.max_count, 10);
    assert_eq!(config.preference.default_count, 4);

    env::set_var("PANTRY_MAX_DENOMINATOR", "sixty-four");
    assert!(matches!(ToolConfig::from_env(), Err(RecipeToolError::Config(_))));
    env::set_var("PANTRY_MAX_DENOMINATOR", "1");
    assert!(matches!(ToolConfig::from_env(), Err(RecipeToolError::Config(_))));
    env::remove_var("PANTRY_MAX_DENOMINATOR");

    env::set_var("PANTRY_DEFAULT_RECIPE_COUNT", "11");
    assert!(matches!(ToolConfig::from_env(), Err(RecipeToolError::Config(_))));

    // A lowered maximum must not leave the built-in default of 3 out of range
    clear_vars();
    env::set_var("PANTRY_MAX_RECIPE_COUNT", "2");
    assert!(matches!(ToolConfig::from_env(), Err(RecipeToolError::Config(_))));
    env::set_var("PANTRY_DEFAULT_RECIPE_COUNT", "2");
    assert_eq!(ToolConfig::from_env().unwrap().preference.default_count, 2);

    clear_vars();
}
