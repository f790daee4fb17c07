//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::Recipe;
use crate::storage::FormatPreference;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<FormatPreference> for OutputFormat {
    fn from(pref: FormatPreference) -> Self {
        match pref {
            FormatPreference::Text => OutputFormat::Text,
            FormatPreference::Json => OutputFormat::Json,
        }
    }
}

/// Output helper for consistent formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };
        if let Ok(json) = rendered {
            println!("{}", json);
        }
    }

    /// Prints recipes as a table (text) or an array (json)
    pub fn recipes(&self, recipes: &[Recipe], empty_message: &str) {
        if self.is_json() {
            self.data(&recipes);
            return;
        }

        if recipes.is_empty() {
            println!("{}", empty_message);
            return;
        }

        println!("{:<6} {:<32} {:>8}  TAGS", "ID", "TITLE", "MINUTES");
        println!("{}", "-".repeat(70));
        for recipe in recipes {
            println!(
                "{:<6} {:<32} {:>8}  {}",
                recipe.id,
                truncate(&recipe.title, 32),
                recipe.cooking_time_minutes,
                recipe.tags().collect::<Vec<_>>().join(", ")
            );
        }
    }

    /// Prints the full details of one recipe
    pub fn recipe(&self, recipe: &Recipe) {
        if self.is_json() {
            self.data(recipe);
            return;
        }

        println!("Recipe: {}", recipe.id);
        println!("Title: {}", recipe.title);
        println!("Cooking time: {} min", recipe.cooking_time_minutes);

        let tags: Vec<_> = recipe.tags().collect();
        if !tags.is_empty() {
            println!("Tags: {}", tags.join(", "));
        }

        let ingredients: Vec<_> = recipe.ingredient_lines().collect();
        if !ingredients.is_empty() {
            println!("\nIngredients:");
            for line in ingredients {
                println!("  - {}", line);
            }
        }

        let steps: Vec<_> = recipe.step_lines().collect();
        if !steps.is_empty() {
            println!("\nSteps:");
            for (i, line) in steps.iter().enumerate() {
                println!("  {}. {}", i + 1, line);
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

/// Shortens text to at most `max` characters, marking the cut with '~'
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
