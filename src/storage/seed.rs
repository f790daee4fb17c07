//! Seed recipes
//!
//! A fresh store is populated once from either the built-in set below or a
//! JSONL file with one recipe object per line. Seed files are only ever read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{RecipeDraft, ValidationError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse recipe at line {line} of {path}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid recipe at line {line} of {path}: {source}")]
    Invalid {
        path: PathBuf,
        line: usize,
        #[source]
        source: ValidationError,
    },
}

/// The built-in example recipes
pub fn builtin() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft::new("Pap and Chakalaka", 40)
            .with_ingredients(
                "Maize meal\nWater\nSalt\nOnion\nTomatoes\nCarrots\nBaked beans\nCurry powder",
            )
            .with_steps(
                "Cook pap until thick\nFry onions and add curry powder\nAdd tomatoes, carrots, and beans for chakalaka\nServe together",
            )
            .with_tags("vegan,vegetarian,traditional"),
        RecipeDraft::new("Grilled Chicken & Veggies", 35)
            .with_ingredients("Chicken breast\nBell peppers\nZucchini\nOlive oil\nSalt\nPepper")
            .with_steps("Season chicken\nGrill chicken and veggies\nServe")
            .with_tags("gluten-free"),
        RecipeDraft::new("Bunny Chow", 45)
            .with_ingredients(
                "1 loaf white bread\nCurry (chicken, lamb, or beans)\nOnion\nGarlic\nSpices",
            )
            .with_steps("Hollow out half a loaf\nFill with hot curry\nServe with sambals or chutney")
            .with_tags("street-food,spicy"),
    ]
}

/// Reads seed recipes from a JSONL file
///
/// Blank lines are skipped. Every record must pass the same validation as a
/// created recipe; any `id` field in the file is ignored.
pub fn read_seed_file(path: &Path) -> Result<Vec<RecipeDraft>, SeedError> {
    let io_err = |source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut drafts = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;

        if line.trim().is_empty() {
            continue;
        }

        let draft: RecipeDraft = serde_json::from_str(&line).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            line: line_num + 1,
            source,
        })?;

        draft.validate().map_err(|source| SeedError::Invalid {
            path: path.to_path_buf(),
            line: line_num + 1,
            source,
        })?;

        drafts.push(draft);
    }

    Ok(drafts)
}
