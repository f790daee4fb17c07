//! CLI integration tests for the recipe catalog
//!
//! These tests drive the `recipes` binary end to end: seeding, every catalog
//! operation, output formats, configuration and the stdin shell.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the recipes binary, isolated from user config
fn recipes_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("recipes"));
    cmd.env("RECIPES_CONFIG", dir.path().join("config.toml"))
        .env_remove("RECIPES_NO_SEED")
        .env_remove("RECIPES_SEED_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(stdout.trim()).unwrap()
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_shows_seed_recipes() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pap and Chakalaka"))
        .stdout(predicate::str::contains("Grilled Chicken & Veggies"))
        .stdout(predicate::str::contains("Bunny Chow"));
}

#[test]
fn test_list_filters_by_tag_case_insensitively() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["list", "--tag", "VEGAN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pap and Chakalaka"))
        .stdout(predicate::str::contains("Bunny Chow").not());
}

#[test]
fn test_list_json_uses_external_field_names() {
    let dir = TempDir::new().unwrap();

    let output = recipes_cmd(&dir)
        .args(["list", "--tag", "spicy", "--format", "json"])
        .assert()
        .success();

    let json = json_stdout(&output);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 3);
    assert_eq!(items[0]["title"], "Bunny Chow");
    assert_eq!(items[0]["cookingTimeMinutes"], 45);
    assert_eq!(items[0]["dietaryTags"], "street-food,spicy");
}

#[test]
fn test_list_unknown_tag_is_empty_not_error() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["list", "--tag", "keto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes tagged 'keto'"));

    let output = recipes_cmd(&dir)
        .args(["list", "--tag", "keto", "-f", "json"])
        .assert()
        .success();
    assert_eq!(json_stdout(&output), serde_json::json!([]));
}

#[test]
fn test_no_seed_starts_empty() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["--no-seed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes"));
}

#[test]
fn test_seed_file_replaces_builtin_recipes() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.jsonl");
    fs::write(
        &seed,
        "{\"title\":\"Pasta\",\"cookingTimeMinutes\":20,\"dietaryTags\":\"vegetarian\"}\n\
         {\"title\":\"Salad\",\"cookingTimeMinutes\":10,\"dietaryTags\":\"vegan, gluten-free\"}\n",
    )
    .unwrap();

    recipes_cmd(&dir)
        .arg("--seed-file")
        .arg(&seed)
        .args(["list", "--tag", "vegan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salad"))
        .stdout(predicate::str::contains("Pasta").not())
        .stdout(predicate::str::contains("Pap and Chakalaka").not());
}

#[test]
fn test_invalid_seed_file_fails() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.jsonl");
    fs::write(&seed, "{\"title\":\"Ok\",\"cookingTimeMinutes\":5}\n{broken\n").unwrap();

    recipes_cmd(&dir)
        .arg("--seed-file")
        .arg(&seed)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

// =============================================================================
// Reading
// =============================================================================

#[test]
fn test_show_displays_details() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Pap and Chakalaka"))
        .stdout(predicate::str::contains("Cooking time: 40 min"))
        .stdout(predicate::str::contains("  - Maize meal"))
        .stdout(predicate::str::contains("  1. Cook pap until thick"));
}

#[test]
fn test_show_missing_recipe_fails() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 99"));
}

#[test]
fn test_show_rejects_invalid_id() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid recipe ID"));
}

// =============================================================================
// Creating
// =============================================================================

#[test]
fn test_add_assigns_next_id() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["add", "--title", "Soup", "--minutes", "15", "--tags", "vegan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recipe: 4 - Soup"));
}

#[test]
fn test_add_json_returns_stored_record() {
    let dir = TempDir::new().unwrap();

    let output = recipes_cmd(&dir)
        .args([
            "add",
            "--title",
            "Soup",
            "--ingredients",
            "Water\\nVeggies",
            "--steps",
            "Boil",
            "--minutes",
            "15",
            "--tags",
            "vegan",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let json = json_stdout(&output);
    assert_eq!(json["id"], 4);
    assert_eq!(json["title"], "Soup");
    assert_eq!(json["ingredients"], "Water\nVeggies");
    assert_eq!(json["cookingTimeMinutes"], 15);
}

#[test]
fn test_add_rejects_empty_title() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["add", "--title", "", "--minutes", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title: Title is required"));
}

#[test]
fn test_add_rejects_zero_cooking_time() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["add", "--title", "Toast", "--minutes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cookingTimeMinutes: Cooking time must be > 0",
        ));
}

// =============================================================================
// Updating and deleting
// =============================================================================

#[test]
fn test_update_replaces_recipe() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["update", "1", "--title", "Updated Pap", "--minutes", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated recipe: 1"));
}

#[test]
fn test_update_id_mismatch_fails() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args([
            "update", "5", "--body-id", "6", "--title", "X", "--minutes", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Id mismatch"));
}

#[test]
fn test_update_missing_recipe_fails() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["update", "99", "--title", "Ghost", "--minutes", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 99"));
}

#[test]
fn test_delete_recipe() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe: 2"));

    recipes_cmd(&dir)
        .args(["delete", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 99"));
}

// =============================================================================
// Shell sessions
// =============================================================================

#[test]
fn test_shell_keeps_changes_within_session() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .arg("shell")
        .write_stdin(
            "add --title 'Vegan Curry' --minutes 30 --tags 'Vegan, spicy'\n\
             delete 1\n\
             list --tag vegan\n\
             show 2\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Created recipe: 4 - Vegan Curry"))
        .stdout(predicate::str::contains("Deleted recipe: 1"))
        .stdout(predicate::str::contains("Title: Grilled Chicken & Veggies"))
        .stdout(predicate::str::contains("Vegan Curry"));
}

#[test]
fn test_shell_reports_errors_and_continues() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["--no-seed", "shell"])
        .write_stdin("show 1\nadd --title Toast --minutes 3\nshow 1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Recipe not found: 1"))
        .stdout(predicate::str::contains("Title: Toast"));
}

#[test]
fn test_shell_reports_unbalanced_quotes() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["--no-seed", "shell"])
        .write_stdin("add --title 'Half open --minutes 5\nadd --title \"Pap en vleis\" --minutes 50\nlist\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not parse command"))
        .stdout(predicate::str::contains("Created recipe: 1 - Pap en vleis"))
        .stdout(predicate::str::contains("Half open").not());
}

#[test]
fn test_shell_json_errors() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["--format", "json", "shell"])
        .write_stdin("update 1 --body-id 2 --title X --minutes 1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"success\":false"))
        .stderr(predicate::str::contains("Id mismatch"));
}

// =============================================================================
// Bench and config
// =============================================================================

#[test]
fn test_bench_reports_timings() {
    let dir = TempDir::new().unwrap();

    let output = recipes_cmd(&dir)
        .args(["bench", "--iterations", "5", "--format", "json"])
        .assert()
        .success();

    let json = json_stdout(&output);
    assert_eq!(json["iterations"], 5);
    assert!(json["totalMs"].is_number());
    assert!(json["averageMs"].is_number());
}

#[test]
fn test_config_default_format_applies() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "default_format = \"json\"\n").unwrap();

    let output = recipes_cmd(&dir).args(["show", "2"]).assert().success();
    let json = json_stdout(&output);
    assert_eq!(json["title"], "Grilled Chicken & Veggies");

    // Explicit flag still wins
    recipes_cmd(&dir)
        .args(["show", "2", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Grilled Chicken & Veggies"));
}

#[test]
fn test_config_seed_false_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "seed = false\n").unwrap();

    recipes_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config file"));
    assert!(dir.path().join("config.toml").is_file());

    recipes_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    recipes_cmd(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    recipes_cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bench_iterations = 500"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "seed = \"sometimes\"\n").unwrap();

    recipes_cmd(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_verbose_emits_log_events() {
    let dir = TempDir::new().unwrap();

    recipes_cmd(&dir)
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("seeded recipe store"));

    recipes_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("seeded recipe store").not());
}
