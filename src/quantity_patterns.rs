//! # Quantity Patterns Module
//!
//! Regex patterns used to recognise leading quantities in amount strings and
//! recipe counts / ingredient hints in free-text preferences.

use lazy_static::lazy_static;
use regex::Regex;

// Leading quantity tokens, tried in this priority order
pub const MIXED_NUMBER_PATTERN: &str = r"^(\d+)\s+(\d+)/(\d+)";
pub const SIMPLE_FRACTION_PATTERN: &str = r"^(\d+)/(\d+)";
pub const DECIMAL_PATTERN: &str = r"^\d+\.\d+";
pub const INTEGER_PATTERN: &str = r"^\d+";

// Recipe count patterns, first match wins
pub const COUNT_PATTERNS: [(&str, &str); 4] = [
    ("count-before-recipes", r"(?i)(\d+)\s*recipes?"),
    ("count-after-recipes", r"(?i)recipes?\s*(\d+)"),
    ("request-phrase", r"(?i)(?:give me|i want|want)\s+(\d+)"),
    ("count-before-keyword", r"(?i)(\d+)\s+(?:recipes?|with)"),
];

// Ingredient hints after a trigger phrase, stopping at "recipe(s)", a comma, a period or the end
pub const INGREDIENT_HINT_PATTERN: &str =
    r"(?i)\b(?:with|that have|containing|using)\s+([^,.]+?)(?:\s*\brecipes?\b|,|\.|$)";

// Separators between several ingredients inside one hint phrase
pub const HINT_SEPARATOR_PATTERN: &str = r"\s+and\s+|,";

lazy_static! {
    pub static ref MIXED_NUMBER_REGEX: Regex =
        Regex::new(MIXED_NUMBER_PATTERN).expect("Mixed number pattern should be valid");
    pub static ref SIMPLE_FRACTION_REGEX: Regex =
        Regex::new(SIMPLE_FRACTION_PATTERN).expect("Simple fraction pattern should be valid");
    pub static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_PATTERN).expect("Decimal pattern should be valid");
    pub static ref INTEGER_REGEX: Regex =
        Regex::new(INTEGER_PATTERN).expect("Integer pattern should be valid");
    pub static ref INGREDIENT_HINT_REGEX: Regex =
        Regex::new(INGREDIENT_HINT_PATTERN).expect("Ingredient hint pattern should be valid");
    pub static ref HINT_SEPARATOR_REGEX: Regex =
        Regex::new(HINT_SEPARATOR_PATTERN).expect("Hint separator pattern should be valid");
}
