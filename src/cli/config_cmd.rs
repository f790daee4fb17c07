//! Config CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::Output;
use crate::storage::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration and where it is read from
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCommands, config: &Config, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config, output),
        ConfigCommands::Init { force } => init(output, force),
    }
}

fn show(config: &Config, output: &Output) -> Result<()> {
    let path = Config::config_path();

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.as_ref().map(|p| p.display().to_string()),
            "config": config,
        }));
    } else {
        match &path {
            Some(p) => println!("# {}", p.display()),
            None => println!("# (no config directory available)"),
        }
        let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
        print!("{}", rendered);
    }

    Ok(())
}

fn init(output: &Output, force: bool) -> Result<()> {
    let path = Config::config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    output.verbose_ctx("config", &format!("Wrote defaults to {}", path.display()));
    output.success(&format!("Wrote config file {}", path.display()));

    Ok(())
}
