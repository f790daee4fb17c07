//! Main CLI application structure

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{config_cmd, recipe, shell};
use crate::service::Catalog;
use crate::storage::{builtin_seed, read_seed_file, Config, RecipeStore};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(author, version, about = "In-memory recipe catalog with dietary tag filtering")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to `default_format` from config)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Start with an empty catalog
    #[arg(long, global = true, env = "RECIPES_NO_SEED")]
    pub no_seed: bool,

    /// JSONL file of recipes to seed the catalog with
    #[arg(long, global = true, env = "RECIPES_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Recipe(recipe::RecipeCommands),

    /// Run commands from stdin against one catalog
    ///
    /// Each line is a command without the leading `recipes`, e.g.
    /// `add --title Soup --minutes 15`. Changes last until the session ends.
    Shell,

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("Failed to load configuration")?;
    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("Recipe catalog starting");

    match cli.command {
        Commands::Config(cmd) => config_cmd::run(cmd, &config, &output)?,

        Commands::Recipe(cmd) => {
            let catalog = open_catalog(cli.seed_file.as_deref(), cli.no_seed, &config, &output)?;
            recipe::run(cmd, &catalog, &output, config.bench_iterations)?
        }

        Commands::Shell => {
            let catalog = open_catalog(cli.seed_file.as_deref(), cli.no_seed, &config, &output)?;
            shell::run(&catalog, &output, config.bench_iterations)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Installs the stderr tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise library events show only with
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "recipe_share=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds a fresh catalog, seeding it unless disabled
fn open_catalog(
    seed_file: Option<&Path>,
    no_seed: bool,
    config: &Config,
    output: &Output,
) -> Result<Catalog> {
    let store = RecipeStore::new();

    if no_seed || !config.seed {
        output.verbose_ctx("seed", "Seeding disabled, starting with an empty catalog");
    } else {
        let drafts = match seed_file.or(config.seed_file.as_deref()) {
            Some(path) => {
                output.verbose_ctx("seed", &format!("Reading seed file: {}", path.display()));
                read_seed_file(path).context("Failed to load seed recipes")?
            }
            None => builtin_seed(),
        };
        let count = store
            .seed_if_empty(drafts)
            .context("Failed to seed the recipe catalog")?;
        output.verbose_ctx("seed", &format!("Seeded {} recipes", count));
    }

    Ok(Catalog::new(Arc::new(store)))
}
