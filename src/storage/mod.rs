//! # Storage Layer
//!
//! Process-lifetime storage for the recipe catalog.
//!
//! ## Sources
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Recipes | In memory | [`RecipeStore`] |
//! | Seed recipes | Built in, or JSONL (one JSON per line) | `seed_file` in config |
//! | Config | TOML | `~/.config/recipe-share/config.toml` |
//!
//! Nothing is written back to disk; the catalog starts from its seed on
//! every run.
//!
//! ## Concurrency Safety
//!
//! - [`RecipeStore`] guards its records and id counter with one
//!   `parking_lot::RwLock`
//! - Each create/update/delete is a single atomic step
//! - Reads return owned snapshots
//!
//! ## Key Types
//!
//! - [`RecipeStore`] - Authoritative recipe records
//! - [`Config`] - User configuration

mod config;
mod memory;
mod seed;

pub use config::{Config, ConfigError, FormatPreference, CONFIG_ENV, DEFAULT_BENCH_ITERATIONS};
pub use memory::{RecipeStore, StoreError};
pub use seed::{builtin as builtin_seed, read_seed_file, SeedError};
