//! # Preference Integration Tests
//!
//! Free-text preferences flowing into a recipe-generation request.

use pantry_recipes::config::PreferenceConfig;
use pantry_recipes::preference_parser::{
    parse_user_preference, GenerationRequest, ParsedPreference, PreferenceParser,
};

#[test]
fn test_documented_preference_cases() {
    assert_eq!(
        parse_user_preference("give me 3 recipes with chicken and rice"),
        ParsedPreference {
            count_override: Some(3),
            ingredients_from_preference: vec!["chicken".to_string(), "rice".to_string()],
        }
    );

    assert_eq!(parse_user_preference(""), ParsedPreference::default());

    assert_eq!(
        parse_user_preference("25 recipes"),
        ParsedPreference {
            count_override: None,
            ingredients_from_preference: vec![],
        }
    );

    assert_eq!(
        parse_user_preference("recipes with cauliflower, recipes with kale").ingredients_from_preference,
        vec!["cauliflower", "kale"]
    );
}

#[test]
fn test_case_insensitive_parsing() {
    let parsed = parse_user_preference("Give Me 4 Recipes With Salmon And Dill");
    assert_eq!(parsed.count_override, Some(4));
    assert_eq!(parsed.ingredients_from_preference, vec!["salmon", "dill"]);
}

#[test]
fn test_unrecognised_phrasing_degrades_quietly() {
    let parsed = parse_user_preference("surprise me!");
    assert_eq!(parsed, ParsedPreference::default());
}

#[test]
fn test_count_before_with_keyword() {
    // Only the fourth pattern recognises "<N> with"
    let parsed = parse_user_preference("6 with spinach");
    assert_eq!(parsed.count_override, Some(6));
    assert_eq!(parsed.ingredients_from_preference, vec!["spinach"]);
}

#[test]
fn test_narrower_count_range() {
    let parser = PreferenceParser::with_config(PreferenceConfig {
        max_count: 5,
        ..Default::default()
    });
    assert_eq!(parser.parse("8 recipes").count_override, None);
    assert_eq!(parser.parse("5 recipes").count_override, Some(5));
}

#[test]
fn test_generation_request_from_form() {
    let parser = PreferenceParser::new();
    let request = GenerationRequest::new(3)
        .with_required_ingredients(["Tomatoes"])
        .with_preference(&parser, "  I want 2 recipes using tomatoes and basil  ");

    assert_eq!(request.recipe_count, 2);
    assert_eq!(request.required_ingredients, vec!["Tomatoes", "basil"]);
    assert_eq!(
        request.preference.as_deref(),
        Some("I want 2 recipes using tomatoes and basil")
    );
}

#[test]
fn test_generation_request_json_shape() {
    let request = GenerationRequest::new(3).with_preference(&PreferenceParser::new(), "with leeks");
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["recipeCount"], 3);
    assert_eq!(json["requiredIngredients"][0], "leeks");
    assert_eq!(json["preference"], "with leeks");
}
