//! End-to-end tests of the `docgen-html` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn docgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docgen-html").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG").env_remove("DOCGEN_TEMPLATE_DIR");
    cmd
}

#[test]
fn test_page_command_writes_output_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.json"), r#"{"documentation_main_name": "CLI Docs"}"#).unwrap();
    fs::write(temp.path().join("page.json"), r#"{"context": "overview"}"#).unwrap();

    docgen(&temp)
        .args(["page", "--main", "main.json", "--page", "page.json", "--out", "site/index.html"])
        .assert()
        .success();

    let html = fs::read_to_string(temp.path().join("site/index.html")).unwrap();
    assert!(html.contains("<title>CLI Docs</title>"));
}

#[test]
fn test_menu_command_prints_to_stdout() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("menu.json"), r#"{"active": "overview"}"#).unwrap();

    docgen(&temp)
        .args(["menu", "--data", "menu.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("menu-normal"));
}

#[test]
fn test_badge_command_uses_configured_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("docgen.toml"), "output = \"public\"\n").unwrap();
    fs::write(temp.path().join("coverage.json"), r#"{"percent": 64, "status": "medium"}"#).unwrap();

    docgen(&temp)
        .args(["badge", "--label", "branches", "--data", "coverage.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public/images/coverage-badge-branches.svg"));

    let svg =
        fs::read_to_string(temp.path().join("public/images/coverage-badge-branches.svg")).unwrap();
    assert!(svg.contains("64%"));
}

#[test]
fn test_template_dir_flag_overrides_page() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("theme")).unwrap();
    fs::write(temp.path().join("theme/page.html"), "custom:{{ data.context }}").unwrap();
    fs::write(temp.path().join("main.json"), "{}").unwrap();
    fs::write(temp.path().join("page.json"), r#"{"context": "routes"}"#).unwrap();

    docgen(&temp)
        .args(["--template-dir", "theme", "page", "--main", "main.json", "--page", "page.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom:routes"));
}

#[test]
fn test_missing_template_dir_warns_and_continues() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("menu.json"), "{}").unwrap();

    docgen(&temp)
        .args(["--template-dir", "missing-theme", "menu", "--data", "menu.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_data_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("menu.json"), "[]").unwrap();

    docgen(&temp)
        .args(["menu", "--data", "menu.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain a JSON object"));
}

#[test]
fn test_render_error_reports_cause() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("theme")).unwrap();
    fs::write(temp.path().join("theme/page.html"), "{{ data.undefined_field }}").unwrap();
    fs::write(temp.path().join("main.json"), "{}").unwrap();
    fs::write(temp.path().join("page.json"), "{}").unwrap();

    docgen(&temp)
        .args(["--template-dir", "theme", "page", "--main", "main.json", "--page", "page.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined_field"));
}
