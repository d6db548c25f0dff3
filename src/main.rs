use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use pantry_recipes::config::ToolConfig;
use pantry_recipes::fraction_format::FractionFormatter;
use pantry_recipes::preference_parser::{GenerationRequest, PreferenceParser};
use pantry_recipes::quantity_scaler::QuantityScaler;
use pantry_recipes::recipe_model::Recipe;

#[derive(Parser)]
#[command(
    name = "pantry-recipes",
    about = "Scale recipe quantities and parse recipe preferences"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scale a single amount string
    Scale {
        /// Amount text, e.g. "1 1/2 cups"
        #[arg(long)]
        amount: String,
        /// Scale factor (desired servings / original servings)
        #[arg(long)]
        factor: f64,
    },
    /// Render a decimal as a kitchen fraction
    Fraction { decimal: f64 },
    /// Print a recipe's ingredients scaled to a number of servings
    Recipe {
        /// Recipe JSON file
        file: PathBuf,
        #[arg(long)]
        servings: u32,
    },
    /// Parse a free-text preference into a generation request
    Prefs {
        text: String,
        /// Requested recipe count before the preference is applied
        #[arg(long)]
        count: Option<u32>,
        /// Ingredients that are already required
        #[arg(long = "require")]
        required: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = ToolConfig::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Scale { amount, factor } => {
            let scaler = QuantityScaler::with_formatter(FractionFormatter::with_config(config.fraction));
            println!("{}", scaler.scale_amount(Some(&amount), factor));
        }
        Command::Fraction { decimal } => {
            println!("{}", FractionFormatter::with_config(config.fraction).to_fraction(decimal));
        }
        Command::Recipe { file, servings } => {
            let recipe = Recipe::from_json_file(&file)?;
            let scaler = QuantityScaler::with_formatter(FractionFormatter::with_config(config.fraction));
            let desired = config.servings.clamp(servings);
            info!("Scaling '{}' to {} servings", recipe.title, desired);

            println!("{} ({} servings)", recipe.title, desired);
            for ingredient in recipe.scaled_ingredients_with(desired, &scaler, &config.servings) {
                println!("- {ingredient}");
            }
        }
        Command::Prefs {
            text,
            count,
            required,
        } => {
            let parser = PreferenceParser::with_config(config.preference.clone());
            let request = GenerationRequest::new(count.unwrap_or(config.preference.default_count))
                .with_required_ingredients(required)
                .with_preference(&parser, &text);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    Ok(())
}
