//! # Recipe File Tests
//!
//! Recipes loaded from JSON the way the recipe API returns them, then
//! rescaled for a new serving count.

use std::io::Write;

use pantry_recipes::errors::RecipeToolError;
use pantry_recipes::recipe_model::Recipe;
use tempfile::NamedTempFile;

fn write_recipe(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_scale_recipe_file() {
    let file = write_recipe(
        r#"{
            "title": "Banana Bread",
            "servings": 8,
            "ingredients": [
                {"item": "flour", "amount": "2 cups"},
                {"item": "baking soda", "amount": "1 tsp"},
                {"item": "bananas", "amount": "3", "notes": "very ripe"},
                {"item": "walnuts"},
                "1/2 cup melted butter"
            ]
        }"#,
    );

    let recipe = Recipe::from_json_file(file.path()).unwrap();
    assert_eq!(recipe.title, "Banana Bread");

    let lines: Vec<String> = recipe
        .scaled_ingredients(4)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "1 cups flour",
            "1/2 tsp baking soda",
            "1.5 bananas (very ripe)",
            "walnuts",
            "1/4 cup melted butter",
        ]
    );
}

#[test]
fn test_invalid_json_is_reported() {
    let file = write_recipe("{ not json");
    let err = Recipe::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, RecipeToolError::RecipeFormat(_)));
    assert!(err.to_string().starts_with("Recipe format error"));
}

#[test]
fn test_missing_file_is_reported() {
    let file = write_recipe("{}");
    let path = file.path().to_path_buf();
    drop(file);

    let err = Recipe::from_json_file(&path).unwrap_err();
    assert!(matches!(err, RecipeToolError::Io(_)));
}

#[test]
fn test_empty_recipe_object() {
    let file = write_recipe("{}");
    let recipe = Recipe::from_json_file(file.path()).unwrap();
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.scaled_ingredients(6).is_empty());
}
