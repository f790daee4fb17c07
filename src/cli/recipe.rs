//! Recipe CLI commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::output::Output;
use crate::domain::{RecipeDraft, RecipeId};
use crate::service::Catalog;

/// Recipe fields supplied on the command line
#[derive(Args, Debug, Clone)]
pub struct RecipeArgs {
    /// Recipe title (required, must not be blank)
    #[arg(long)]
    pub title: String,

    /// Ingredients, one per line (a literal "\n" starts a new line)
    #[arg(long, default_value = "")]
    pub ingredients: String,

    /// Steps, one per line (a literal "\n" starts a new line)
    #[arg(long, default_value = "")]
    pub steps: String,

    /// Cooking time in minutes (at least 1)
    #[arg(long = "minutes", short = 'm', allow_negative_numbers = true)]
    pub cooking_time_minutes: i32,

    /// Comma-separated dietary tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

impl RecipeArgs {
    pub fn into_draft(self) -> RecipeDraft {
        RecipeDraft::new(self.title, self.cooking_time_minutes)
            .with_ingredients(expand_newlines(&self.ingredients))
            .with_steps(expand_newlines(&self.steps))
            .with_tags(self.tags)
    }
}

/// Turns literal `\n` sequences into line breaks
fn expand_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// List recipes, optionally filtered by dietary tag
    ///
    /// Examples:
    ///   recipes list                # Every recipe
    ///   recipes list --tag vegan    # Recipes tagged "vegan" (any case)
    List {
        /// Dietary tag to filter by (case-insensitive, whole tag)
        #[arg(long, short)]
        tag: Option<String>,
    },

    /// Show recipe details
    Show {
        /// Recipe ID
        id: RecipeId,
    },

    /// Add a recipe
    Add(RecipeArgs),

    /// Replace every field of a recipe
    Update {
        /// Recipe ID
        id: RecipeId,

        /// ID carried in the submitted record (defaults to ID)
        #[arg(long)]
        body_id: Option<u64>,

        #[command(flatten)]
        recipe: RecipeArgs,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: RecipeId,
    },

    /// Time repeated unfiltered list calls
    Bench {
        /// Number of list calls (defaults to `bench_iterations` from config)
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
        iterations: Option<u32>,
    },
}

pub fn run(
    cmd: RecipeCommands,
    catalog: &Catalog,
    output: &Output,
    bench_default: u32,
) -> Result<()> {
    match cmd {
        RecipeCommands::List { tag } => list_recipes(catalog, output, tag.as_deref()),
        RecipeCommands::Show { id } => show_recipe(catalog, output, id),
        RecipeCommands::Add(args) => add_recipe(catalog, output, args),
        RecipeCommands::Update { id, body_id, recipe } => {
            let body_id = body_id.map(RecipeId::new).unwrap_or(id);
            update_recipe(catalog, output, id, body_id, recipe)
        }
        RecipeCommands::Delete { id } => delete_recipe(catalog, output, id),
        RecipeCommands::Bench { iterations } => {
            bench(catalog, output, iterations.unwrap_or(bench_default))
        }
    }
}

fn list_recipes(catalog: &Catalog, output: &Output, tag: Option<&str>) -> Result<()> {
    output.verbose_ctx("list", &format!("Listing recipes, tag filter: {:?}", tag));
    let recipes = catalog.list_recipes(tag);
    output.verbose_ctx("list", &format!("Found {} recipes", recipes.len()));

    let empty_message = match tag.map(str::trim).filter(|t| !t.is_empty()) {
        Some(tag) => format!("No recipes tagged '{}'", tag),
        None => "No recipes".to_string(),
    };
    output.recipes(&recipes, &empty_message);

    Ok(())
}

fn show_recipe(catalog: &Catalog, output: &Output, id: RecipeId) -> Result<()> {
    let recipe = catalog.get_recipe(id)?;
    output.recipe(&recipe);
    Ok(())
}

fn add_recipe(catalog: &Catalog, output: &Output, args: RecipeArgs) -> Result<()> {
    let recipe = catalog.create_recipe(args.into_draft())?;

    if output.is_json() {
        output.data(&recipe);
    } else {
        output.success(&format!("Created recipe: {} - {}", recipe.id, recipe.title));
    }

    Ok(())
}

fn update_recipe(
    catalog: &Catalog,
    output: &Output,
    id: RecipeId,
    body_id: RecipeId,
    args: RecipeArgs,
) -> Result<()> {
    output.verbose_ctx("update", &format!("Replacing recipe {} (body id {})", id, body_id));
    let input = args.into_draft().into_recipe(body_id);
    catalog.update_recipe(id, input)?;

    output.success(&format!("Updated recipe: {}", id));
    Ok(())
}

fn delete_recipe(catalog: &Catalog, output: &Output, id: RecipeId) -> Result<()> {
    catalog.delete_recipe(id)?;
    output.success(&format!("Deleted recipe: {}", id));
    Ok(())
}

fn bench(catalog: &Catalog, output: &Output, iterations: u32) -> Result<()> {
    output.verbose_ctx("bench", &format!("Running {} list iterations", iterations));
    let report = catalog.benchmark(iterations);

    if output.is_json() {
        output.data(&report);
    } else {
        println!(
            "Listed {} recipes {} times in {:.3} ms ({:.4} ms per call)",
            catalog.store().len(),
            report.iterations,
            report.total_ms,
            report.average_ms
        );
    }

    Ok(())
}
