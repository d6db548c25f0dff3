//! # Pantry Recipes
//!
//! Recipe utilities for the pantry tracker: scaling ingredient amounts to a
//! new number of servings, rendering quantities as kitchen fractions, and
//! reading a recipe count and ingredient hints from free-text preferences.

pub mod config;
pub mod errors;
pub mod fraction_format;
pub mod preference_parser;
pub mod quantity_patterns;
pub mod quantity_scaler;
pub mod recipe_model;
