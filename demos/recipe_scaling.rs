//! # Recipe Scaling Example
//!
//! Walks a recipe through several serving counts and runs a few free-text
//! preferences through the parser, printing what the recipe screen and the
//! generation form would show.

use pantry_recipes::fraction_format::to_fraction;
use pantry_recipes::preference_parser::{parse_user_preference, GenerationRequest, PreferenceParser};
use pantry_recipes::recipe_model::{Recipe, RecipeIngredient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Recipe Scaling Example");
    println!("======================\n");

    let recipe = Recipe::new("Classic Pancakes", 4)
        .with_ingredient(RecipeIngredient::structured("all-purpose flour", "1 1/2 cups"))
        .with_ingredient(RecipeIngredient::structured("baking powder", "3 1/2 tsp"))
        .with_ingredient(RecipeIngredient::structured("sugar", "1 tbsp"))
        .with_ingredient(RecipeIngredient::structured("milk", "1 1/4 cups").with_notes("warm"))
        .with_ingredient(RecipeIngredient::structured("butter", "3 tbsp").with_notes("melted"))
        .with_ingredient(RecipeIngredient::plain("1 egg"))
        .with_ingredient(RecipeIngredient::plain("salt to taste"));

    for servings in [1, 2, 4, 6, 12] {
        println!("{} for {} servings:", recipe.title, servings);
        for ingredient in recipe.scaled_ingredients(servings) {
            println!("  - {ingredient}");
        }
        println!();
    }

    println!("Fractions");
    println!("---------");
    for value in [0.125, 0.333, 0.1, 0.45, 0.008] {
        println!("  {value} -> {}", to_fraction(value));
    }
    println!();

    println!("Preferences");
    println!("-----------");
    let parser = PreferenceParser::new();
    for text in [
        "give me 3 recipes with chicken and rice",
        "25 recipes",
        "recipes with cauliflower, recipes with kale",
        "something quick using eggs and spinach",
    ] {
        let parsed = parse_user_preference(text);
        let request = GenerationRequest::new(3).with_preference(&parser, text);
        println!("  \"{text}\"");
        println!("    parsed:  {}", serde_json::to_string(&parsed)?);
        println!("    request: {}", serde_json::to_string(&request)?);
    }

    Ok(())
}
