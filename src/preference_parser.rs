//! # Preference Parser
//!
//! Heuristic extraction of a recipe count and ingredient hints from the
//! free-text preference a user types before generating recipes
//! ("give me 3 recipes with chicken and rice").
//!
//! Nothing here validates against an ingredient vocabulary. Phrasing the
//! patterns do not recognise simply yields no override and fewer hints.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::{debug, info, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::PreferenceConfig;
use crate::quantity_patterns::{COUNT_PATTERNS, HINT_SEPARATOR_REGEX, INGREDIENT_HINT_REGEX};

/// Result of parsing a free-text preference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPreference {
    /// Requested number of recipes, when one was given inside the accepted range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_override: Option<u32>,
    /// Lowercase ingredient hints in first-seen order, without duplicates
    pub ingredients_from_preference: Vec<String>,
}

/// One entry of the ordered count-pattern table
#[derive(Debug, Clone)]
pub struct CountPattern {
    pub name: &'static str,
    pub regex: Regex,
}

lazy_static! {
    static ref COUNT_REGEXES: Vec<CountPattern> = COUNT_PATTERNS
        .iter()
        .map(|&(name, pattern)| CountPattern {
            name,
            regex: Regex::new(pattern).expect("Count pattern should be valid"),
        })
        .collect();
}

/// Preference parser bound to a recipe-count range
#[derive(Debug, Clone, Default)]
pub struct PreferenceParser {
    config: PreferenceConfig,
}

impl PreferenceParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreferenceConfig) -> Self {
        Self { config }
    }

    /// Parse a free-text preference
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_recipes::preference_parser::PreferenceParser;
    ///
    /// let parser = PreferenceParser::new();
    /// let parsed = parser.parse("give me 3 recipes with chicken and rice");
    ///
    /// assert_eq!(parsed.count_override, Some(3));
    /// assert_eq!(parsed.ingredients_from_preference, vec!["chicken", "rice"]);
    /// ```
    pub fn parse(&self, preference: &str) -> ParsedPreference {
        let text = preference.trim();
        if text.is_empty() {
            return ParsedPreference::default();
        }

        let parsed = ParsedPreference {
            count_override: self.extract_count(text),
            ingredients_from_preference: extract_ingredients(text),
        };
        debug!(
            "Parsed preference '{}': count={:?}, ingredients={:?}",
            text, parsed.count_override, parsed.ingredients_from_preference
        );
        parsed
    }

    /// Only the first matching pattern is consulted; an out-of-range count
    /// means no override rather than a clamped one.
    fn extract_count(&self, text: &str) -> Option<u32> {
        let (pattern, captured) = COUNT_REGEXES.iter().find_map(|pattern| {
            pattern
                .regex
                .captures(text)
                .map(|caps| (pattern.name, caps[1].to_string()))
        })?;

        match captured.parse::<u32>() {
            Ok(count) if self.config.accepts(count) => {
                trace!("Count {} matched by pattern '{}'", count, pattern);
                Some(count)
            }
            _ => {
                debug!(
                    "Discarding count '{}' from pattern '{}': outside {}..={}",
                    captured, pattern, self.config.min_count, self.config.max_count
                );
                None
            }
        }
    }
}

fn extract_ingredients(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ingredients = Vec::new();

    for caps in INGREDIENT_HINT_REGEX.captures_iter(text) {
        let phrase = caps[1].to_lowercase();
        trace!("Ingredient hint phrase: '{}'", phrase);

        for part in HINT_SEPARATOR_REGEX.split(&phrase) {
            let part = part.trim();
            if part.chars().count() < 2 || part == "recipes" {
                continue;
            }
            if seen.insert(part.to_string()) {
                ingredients.push(part.to_string());
            }
        }
    }

    ingredients
}

/// Parse a free-text preference with the default 1..=20 count range
pub fn parse_user_preference(preference: &str) -> ParsedPreference {
    PreferenceParser::new().parse(preference)
}

/// Parameters of one recipe-generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub recipe_count: u32,
    pub required_ingredients: Vec<String>,
    /// Raw preference text as typed by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
}

impl GenerationRequest {
    pub fn new(recipe_count: u32) -> Self {
        Self {
            recipe_count,
            required_ingredients: Vec::new(),
            preference: None,
        }
    }

    pub fn with_required_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Merge a parsed preference into this request
    ///
    /// Hints are appended after the existing required ingredients, skipping
    /// any already present (case-insensitive). A count override replaces the
    /// requested recipe count.
    pub fn apply_preference(&mut self, parsed: &ParsedPreference) {
        let mut present: HashSet<String> = self
            .required_ingredients
            .iter()
            .map(|i| i.trim().to_lowercase())
            .collect();

        for hint in &parsed.ingredients_from_preference {
            if present.insert(hint.clone()) {
                self.required_ingredients.push(hint.clone());
            }
        }

        if let Some(count) = parsed.count_override {
            info!(
                "Recipe count overridden by preference: {} -> {}",
                self.recipe_count, count
            );
            self.recipe_count = count;
        }
    }

    /// Parse `preference` and merge it, keeping the raw text on the request
    pub fn with_preference(mut self, parser: &PreferenceParser, preference: &str) -> Self {
        let parsed = parser.parse(preference);
        self.apply_preference(&parsed);
        if !preference.trim().is_empty() {
            self.preference = Some(preference.trim().to_string());
        }
        self
    }
}
