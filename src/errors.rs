//! # Error Types Module
//!
//! The scaling and parsing utilities never fail; they degrade to a safe
//! default instead. These errors cover the edges around them: configuration
//! overrides and recipe files loaded by the command-line front end.

/// Custom error types for the recipe toolkit
#[derive(Debug)]
pub enum RecipeToolError {
    /// Invalid configuration value
    Config(String),
    /// Recipe file could not be read
    Io(std::io::Error),
    /// Recipe JSON could not be decoded
    RecipeFormat(String),
}

impl std::fmt::Display for RecipeToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeToolError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RecipeToolError::Io(err) => write!(f, "I/O error: {err}"),
            RecipeToolError::RecipeFormat(msg) => write!(f, "Recipe format error: {msg}"),
        }
    }
}

impl std::error::Error for RecipeToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecipeToolError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RecipeToolError {
    fn from(err: std::io::Error) -> Self {
        RecipeToolError::Io(err)
    }
}

impl From<serde_json::Error> for RecipeToolError {
    fn from(err: serde_json::Error) -> Self {
        RecipeToolError::RecipeFormat(err.to_string())
    }
}
