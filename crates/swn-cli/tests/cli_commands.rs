//! End-to-end tests for the `swnt` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn swnt() -> Command {
    Command::cargo_bin("swnt").unwrap()
}

// ---------------------------------------------------------------------------
// religion
// ---------------------------------------------------------------------------

#[test]
fn religion_prints_all_fields() {
    swnt()
        .args(["religion", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Religion\n"))
        .stdout(predicate::str::contains("Origin\t:\t"))
        .stdout(predicate::str::contains("Evolution\t:\t"))
        .stdout(predicate::str::contains("Leadership\t:\t"));
}

#[test]
fn religion_is_reproducible_with_seed() {
    let first = swnt().args(["--seed", "99", "religion"]).output().unwrap();
    let second = swnt().args(["--seed", "99", "religion"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// world
// ---------------------------------------------------------------------------

#[test]
fn world_with_culture() {
    swnt()
        .args(["world", "--culture", "greek", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Culture\t:\tGreek"))
        .stdout(predicate::str::contains("Tech Level\t:\t"))
        .stdout(predicate::str::contains("Enemies\t:\t"))
        .stdout(predicate::str::contains("Relationship").not());
}

#[test]
fn secondary_world_has_relations() {
    swnt()
        .args(["world", "--secondary", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Origin\t:\t"))
        .stdout(predicate::str::contains("Relationship\t:\t"))
        .stdout(predicate::str::contains("Contact\t:\t"));
}

#[test]
fn world_excludes_tags() {
    for seed in ["1", "2", "3", "4", "5"] {
        swnt()
            .args([
                "world", "--seed", seed, "-e", "Alien Ruins", "-e", "zombies", "-e", "hivemind",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Name\t:\tAlien Ruins").not())
            .stdout(predicate::str::contains("Name\t:\tZombies").not())
            .stdout(predicate::str::contains("Name\t:\tHivemind").not());
    }
}

#[test]
fn world_unknown_culture_fails() {
    swnt()
        .args(["world", "--culture", "martian"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: unknown culture: martian"));
}

#[test]
fn world_markdown() {
    swnt()
        .args(["world", "--format", "markdown", "--seed", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| --- | --- |"))
        .stdout(predicate::str::contains("| Atmosphere | "));
}

// ---------------------------------------------------------------------------
// tags
// ---------------------------------------------------------------------------

#[test]
fn tag_by_name() {
    swnt()
        .args(["tag", "civil war"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Civil War\n"))
        .stdout(predicate::str::contains("Complications\t:\t"));
}

#[test]
fn unknown_tag_fails() {
    swnt()
        .args(["tag", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tag with name \"Atlantis\""));
}

#[test]
fn tags_lists_names() {
    swnt()
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("Abandoned Colony\n"))
        .stdout(predicate::str::contains("Zombies\n"));
}

#[test]
fn tags_as_json() {
    let output = swnt().args(["tags", "-f", "json"]).output().unwrap();
    let names: Vec<String> = json_string_lines(&output.stdout);
    assert_eq!(names.len(), 10);
}

fn json_string_lines(stdout: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .map(str::trim)
        .filter(|l| l.starts_with('"'))
        .map(|l| l.trim_end_matches(',').trim_matches('"').to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// other generators
// ---------------------------------------------------------------------------

#[test]
fn culture_prints_one_culture() {
    swnt()
        .args(["culture", "--seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Culture\nCulture\t:\t"));
}

#[test]
fn problem_has_three_parts() {
    swnt()
        .args(["problem", "--seed", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflict\t:\t"))
        .stdout(predicate::str::contains("Situation\t:\t"))
        .stdout(predicate::str::contains("Focus\t:\t"));
}

#[test]
fn npc_has_every_trait() {
    let assert = swnt()
        .args(["npc", "--culture", "japanese", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Culture\t:\tJapanese"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for label in ["Age", "Background", "Role", "Problem", "Motivation", "Quirk"] {
        assert!(stdout.contains(&format!("{label}\t:\t")), "{label} missing");
    }
}

#[test]
fn name_with_culture() {
    swnt()
        .args(["name", "-c", "Russian"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Russian Names\n"));
}

#[test]
fn roll_dice() {
    swnt()
        .args(["roll", "d20", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"1d20\""))
        .stdout(predicate::str::contains("\"label\": \"Result\""));
}

#[test]
fn roll_bad_expression_fails() {
    swnt()
        .args(["roll", "2x6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid configuration"));
}

#[test]
fn roll_too_many_dice_fails() {
    swnt()
        .args(["roll", "100000000d100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid configuration"))
        .stderr(predicate::str::contains("too many dice"));
}

#[test]
fn table_format() {
    swnt()
        .args(["religion", "-f", "table", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Religion"))
        .stdout(predicate::str::contains("Leadership"));
}
