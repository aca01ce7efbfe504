//! CLI tests against the built binary.
//!
//! Every run gets its own HOME so config reads and writes stay isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn disco(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("disco").unwrap();
    cmd.env("HOME", home.path()).env_remove("DISCO_LOG");
    cmd
}

#[test]
fn encode_prints_fenced_block() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "Welcome to Discord", "--apply", "11..18=gold"])
        .assert()
        .success()
        .stdout("```ansi\nWelcome to \x1b[2;33mDiscord\x1b[0m\n```\n");
}

#[test]
fn encode_raw_omits_fence() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "bold", "--apply", "0..4=1", "--raw"])
        .assert()
        .success()
        .stdout("\x1b[1;2mbold\x1b[0m\n");
}

#[test]
fn encode_reads_stdin() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "--raw", "--apply", "0..3=rainbow"])
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout("\x1b[2;31ma\x1b[0m\x1b[2;33mb\x1b[0m\x1b[2;32mc\x1b[0m\n");
}

#[test]
fn encode_template() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "--template", "rules", "--raw"])
        .assert()
        .success()
        .stdout("SERVER RULES:\n1. Be respectful\n2. No spamming\n3. Have fun!\n");
}

#[test]
fn encode_json_round_trips_through_tree() {
    let home = TempDir::new().unwrap();
    let output = disco(&home)
        .args(["encode", "Hello world", "-a", "0..5=red", "-a", "6..11=bg-blurple", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree = home.path().join("tree.json");
    std::fs::write(&tree, &output.stdout).unwrap();

    disco(&home)
        .args(["encode", "--raw", "--tree"])
        .arg(&tree)
        .assert()
        .success()
        .stdout("\x1b[2;31mHello\x1b[0m \x1b[2;45mworld\x1b[0m\n");
}

#[test]
fn encode_out_of_range_edit_fails() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "short", "--apply", "0..50=31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0..50=31"))
        .stderr(predicate::str::contains("outside"));
}

#[test]
fn encode_unknown_style_name_fails_to_parse() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "x", "--apply", "0..1=mauve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mauve"));
}

#[test]
fn encode_respects_fence_setting() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("disco");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[output]\nfence = false\n").unwrap();

    disco(&home)
        .args(["encode", "plain"])
        .assert()
        .success()
        .stdout("plain\n");
}

#[test]
fn encode_preview_prints_true_color() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["encode", "hi", "--apply", "0..2=red", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("38;2;220;50;47"))
        .stdout(predicate::str::contains("```ansi\n"));
}

#[test]
fn templates_lists_all_names() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("welcome"))
        .stdout(predicate::str::contains("colored"))
        .stdout(predicate::str::contains("Server Rules"));
}

#[test]
fn palette_lists_codes() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("yellowish-green"))
        .stdout(predicate::str::contains("#6c71c4"));
}

#[test]
fn theme_toggles_and_persists() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout("Color scheme: light\n");

    let saved = std::fs::read_to_string(home.path().join(".config/disco/config.toml")).unwrap();
    assert!(saved.contains("color_scheme = \"light\""));

    disco(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout("Color scheme: dark\n");
    disco(&home)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout("Color scheme: light\n");
}

#[test]
fn config_show_is_annotated() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Preview color scheme"))
        .stdout(predicate::str::contains("fence = true"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    disco(&home)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disco"));
}
