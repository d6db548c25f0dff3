//! # Recipe Data Model
//!
//! Recipes as delivered by the recipe API: a serving count plus ingredient
//! entries that are either structured (`{item, amount, notes}`) or plain
//! strings. The model feeds the quantity scaler when the user changes the
//! number of servings.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_recipes::recipe_model::{Recipe, RecipeIngredient};
//!
//! let recipe = Recipe::new("Pancakes", 4)
//!     .with_ingredient(RecipeIngredient::structured("flour", "1 1/2 cups"))
//!     .with_ingredient(RecipeIngredient::plain("2 eggs"));
//!
//! let lines: Vec<String> = recipe
//!     .scaled_ingredients(2)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(lines, vec!["3/4 cups flour", "1 eggs"]);
//! ```

use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::ServingsConfig;
use crate::errors::RecipeToolError;
use crate::quantity_scaler::{scale_factor, QuantityScaler};

/// A recipe as returned by the recipe API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe title
    #[serde(default)]
    pub title: String,

    /// Number of servings the amounts are written for
    #[serde(default)]
    pub servings: Option<u32>,

    /// Ingredient entries in recipe order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// An ingredient entry, structured or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeIngredient {
    /// Structured entry (e.g., `{"item": "flour", "amount": "2 cups"}`)
    Structured {
        item: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    /// Free-text entry (e.g., `"2 cups flour"`)
    Plain(String),
}

/// An ingredient with its amount scaled for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub item: String,
    /// Scaled amount, empty when the entry had none
    pub amount: String,
    pub notes: Option<String>,
}

impl RecipeIngredient {
    pub fn structured(item: &str, amount: &str) -> Self {
        RecipeIngredient::Structured {
            item: item.to_string(),
            amount: Some(amount.to_string()),
            notes: None,
        }
    }

    pub fn plain(text: &str) -> Self {
        RecipeIngredient::Plain(text.to_string())
    }

    /// Add notes to a structured entry; plain entries are returned unchanged
    pub fn with_notes(self, notes: &str) -> Self {
        match self {
            RecipeIngredient::Structured { item, amount, .. } => RecipeIngredient::Structured {
                item,
                amount,
                notes: Some(notes.to_string()),
            },
            plain => plain,
        }
    }

    /// Scale this entry's amount by `factor`
    ///
    /// Plain entries are scaled as a whole: the leading quantity changes and
    /// the rest of the line is kept as written.
    pub fn scale(&self, scaler: &QuantityScaler, factor: f64) -> ScaledIngredient {
        match self {
            RecipeIngredient::Structured {
                item,
                amount,
                notes,
            } => ScaledIngredient {
                item: item.clone(),
                amount: scaler.scale_amount(amount.as_deref(), factor),
                notes: notes.clone(),
            },
            RecipeIngredient::Plain(text) => ScaledIngredient {
                item: String::new(),
                amount: scaler.scale_amount(Some(text), factor),
                notes: None,
            },
        }
    }
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = [self.amount.as_str(), self.item.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{line}")?;
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            write!(f, " ({notes})")?;
        }
        Ok(())
    }
}

impl Recipe {
    pub fn new(title: &str, servings: u32) -> Self {
        Self {
            title: title.to_string(),
            servings: Some(servings),
            ingredients: Vec::new(),
        }
    }

    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Load a recipe from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, RecipeToolError> {
        let content = std::fs::read_to_string(path)?;
        let recipe: Recipe = serde_json::from_str(&content)?;
        info!(
            "Loaded recipe '{}' with {} ingredients from {}",
            recipe.title,
            recipe.ingredients.len(),
            path.display()
        );
        Ok(recipe)
    }

    /// Ingredients rescaled for `desired_servings` with default settings
    pub fn scaled_ingredients(&self, desired_servings: u32) -> Vec<ScaledIngredient> {
        self.scaled_ingredients_with(desired_servings, &QuantityScaler::new(), &ServingsConfig::default())
    }

    /// Ingredients rescaled for `desired_servings`
    ///
    /// The scale factor is computed once for the whole recipe, then applied
    /// to every entry.
    pub fn scaled_ingredients_with(
        &self,
        desired_servings: u32,
        scaler: &QuantityScaler,
        servings: &ServingsConfig,
    ) -> Vec<ScaledIngredient> {
        let factor = scale_factor(desired_servings, self.servings, servings);
        debug!(
            "Scaling '{}' from {:?} to {} servings (factor {})",
            self.title, self.servings, desired_servings, factor
        );
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.scale(scaler, factor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe::new("Fried Rice", 4)
            .with_ingredient(RecipeIngredient::structured("rice", "2 cups").with_notes("day-old"))
            .with_ingredient(RecipeIngredient::structured("soy sauce", "3 tbsp"))
            .with_ingredient(RecipeIngredient::plain("1/2 tsp white pepper"))
            .with_ingredient(RecipeIngredient::plain("salt to taste"))
    }

    #[test]
    fn test_scale_up() {
        let scaled = sample_recipe().scaled_ingredients(8);
        assert_eq!(scaled[0].amount, "4 cups");
        assert_eq!(scaled[0].to_string(), "4 cups rice (day-old)");
        assert_eq!(scaled[1].to_string(), "6 tbsp soy sauce");
        assert_eq!(scaled[2].to_string(), "1 tsp white pepper");
        assert_eq!(scaled[3].to_string(), "salt to taste");
    }

    #[test]
    fn test_scale_down_to_fraction() {
        let scaled = sample_recipe().scaled_ingredients(1);
        assert_eq!(scaled[0].to_string(), "1/2 cups rice (day-old)");
        assert_eq!(scaled[1].to_string(), "3/4 tbsp soy sauce");
        assert_eq!(scaled[2].to_string(), "1/8 tsp white pepper");
    }

    #[test]
    fn test_missing_amount_renders_item_only() {
        let recipe = Recipe::new("Salad", 2).with_ingredient(RecipeIngredient::Structured {
            item: "lettuce".to_string(),
            amount: None,
            notes: None,
        });
        let scaled = recipe.scaled_ingredients(4);
        assert_eq!(scaled[0].amount, "");
        assert_eq!(scaled[0].to_string(), "lettuce");
    }

    #[test]
    fn test_deserialize_mixed_ingredients() {
        let json = r#"{
            "title": "Omelette",
            "servings": 2,
            "ingredients": [
                {"item": "eggs", "amount": "3"},
                {"item": "milk", "amount": "2 tbsp", "notes": "whole"},
                "1 pinch salt"
            ]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, Some(2));
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[2], RecipeIngredient::plain("1 pinch salt"));

        let scaled = recipe.scaled_ingredients(4);
        assert_eq!(scaled[0].to_string(), "6 eggs");
        assert_eq!(scaled[1].to_string(), "4 tbsp milk (whole)");
        assert_eq!(scaled[2].to_string(), "2 pinch salt");
    }

    #[test]
    fn test_missing_servings_treated_as_one() {
        let json = r#"{"title": "Toast", "ingredients": ["1 slice bread"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, None);
        assert_eq!(recipe.scaled_ingredients(2)[0].to_string(), "2 slice bread");
    }
}
