use std::fs;

use assert_cmd::Command;
use bannerfont::test_support::{synthetic_block, synthetic_font_text};
use predicates::prelude::*;
use tempfile::TempDir;

fn font_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("standard.txt"), synthetic_font_text()).unwrap();
    fs::write(dir.path().join("shadow.txt"), "shadow header\n").unwrap();
    dir
}

fn bannerfont(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bannerfont").unwrap();
    cmd.current_dir(dir.path())
        .env("RUST_LOG", "warn")
        .arg("--font-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn renders_text_argument_with_default_banner() {
    let dir = font_dir();
    // the blank last row already ends the output with a line break
    let expected = synthetic_block("Hi").join("\n");
    bannerfont(&dir)
        .args(["render", "--text", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn renders_stdin() {
    let dir = font_dir();
    let expected = format!(
        "{}\n{}\n",
        synthetic_block("a").join("\n"),
        synthetic_block("b").join("\n")
    );
    bannerfont(&dir)
        .args(["render", "--banner", "standard"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn colored_rows_are_reset() {
    let dir = font_dir();
    bannerfont(&dir)
        .args(["render", "--text", "x", "--fg", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1B[38;5;2m[x0]\x1B[0m\n"));
}

#[test]
fn non_ascii_text_exits_with_2() {
    let dir = font_dir();
    bannerfont(&dir)
        .args(["render", "--text", "h\u{e9}llo"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn unknown_banner_fails() {
    let dir = font_dir();
    bannerfont(&dir)
        .args(["render", "--text", "hello", "--banner", "missing"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn strict_flag_rejects_truncated_banner() {
    let dir = font_dir();
    bannerfont(&dir)
        .args(["render", "--text", "A", "--banner", "shadow"])
        .assert()
        .success();
    bannerfont(&dir)
        .args(["render", "--text", "A", "--banner", "shadow", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no row 0"));
}

#[test]
fn lists_banners() {
    let dir = font_dir();
    bannerfont(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("shadow\nstandard\n");
}

#[test]
fn inspects_banner() {
    let dir = font_dir();
    bannerfont(&dir)
        .args(["inspect", "--banner", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Defined characters: 95"))
        .stdout(predicate::str::contains("Lines: 856"))
        .stdout(predicate::str::contains("Widest glyph: 4"));
}

#[test]
fn config_file_sets_default_banner() {
    let dir = font_dir();
    fs::write(
        dir.path().join("bannerfont.toml"),
        "default_banner = \"shadow\"\nmissing_glyph = \"error\"\n",
    )
    .unwrap();
    bannerfont(&dir)
        .args(["render", "--text", "A"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no row 0"));
}
