//! Recipe Share - In-memory recipe catalog

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = recipe_share::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
