//! Interactive shell over a single catalog
//!
//! Reads one command per line and runs it against the same in-memory catalog,
//! so recipes added early in a session are visible to later commands. A failed
//! command is reported and the session carries on.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::Output;
use super::recipe::{self, RecipeCommands};
use crate::service::Catalog;

const PROMPT: &str = "recipes> ";

#[derive(Parser)]
#[command(name = "recipes", no_binary_name = true)]
#[command(disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Recipe(RecipeCommands),

    /// End the session
    #[command(alias = "quit")]
    Exit,
}

/// Runs the shell on stdin
pub fn run(catalog: &Catalog, output: &Output, bench_default: u32) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    run_lines(stdin.lock(), interactive, catalog, output, bench_default)
}

/// Runs the shell on any line source
pub fn run_lines<R: BufRead>(
    reader: R,
    interactive: bool,
    catalog: &Catalog,
    output: &Output,
    bench_default: u32,
) -> Result<()> {
    let mut failures = 0usize;
    let mut lines = reader.lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush().context("Failed to flush prompt")?;
        }

        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read command")?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let words = match shell_words::split(trimmed) {
            Ok(words) => words,
            Err(e) => {
                output.error(&format!("Could not parse command: {}", e));
                failures += 1;
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                use clap::error::ErrorKind;
                match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        print!("{}", e.render());
                    }
                    _ => {
                        let rendered = e.render().to_string();
                        output.error(rendered.trim_start_matches("error: ").trim_end());
                        failures += 1;
                    }
                }
                continue;
            }
        };

        match parsed.command {
            ShellCommand::Exit => break,
            ShellCommand::Recipe(cmd) => {
                output.verbose_ctx("shell", &format!("Running: {}", trimmed));
                if let Err(e) = recipe::run(cmd, catalog, output, bench_default) {
                    output.error(&format!("{:#}", e));
                    failures += 1;
                }
            }
        }
    }

    output.verbose_ctx("shell", &format!("Session ended with {} failed commands", failures));
    Ok(())
}
