//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Recipe | Catalog operations | `list --tag vegan`, `show 1`, `add`, `update 1`, `delete 1` |
//! | Session | Many commands, one catalog | `shell` |
//! | Diagnostics | Timing and settings | `bench`, `config show`, `config init` |
//!
//! Every invocation starts from a freshly seeded catalog; use `shell` to keep
//! changes across commands.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output, including store events:
//! ```bash
//! recipes --verbose list --tag vegan
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod config_cmd;
mod output;
mod recipe;
mod shell;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use recipe::{RecipeArgs, RecipeCommands};
pub use shell::run_lines as run_shell_lines;
