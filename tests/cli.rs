//! Integration tests for the tech-radar-build binary

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("tech-radar-build").unwrap()
}

#[test]
fn plan_builtin_lists_all_artifacts() {
    bin()
        .args(["plan", "--builtin"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tech-radar-editor.es.js"))
        .stderr(predicate::str::contains("tech-radar-editor.umd.js"))
        .stderr(predicate::str::contains("style.css"))
        .stderr(predicate::str::contains("TechRadarEditor"));
}

#[test]
fn plan_builtin_json_is_machine_readable() {
    let output = bin()
        .args(["plan", "--builtin", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(plan["entry"], "src/main.ts");
    assert_eq!(plan["name"], "TechRadarEditor");
    assert_eq!(plan["out_dir"], "dist");

    let artifacts = plan["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 3);
    assert_eq!(artifacts[0]["file_name"], "tech-radar-editor.es.js");
    assert_eq!(artifacts[0]["format"], "es");
    assert_eq!(artifacts[1]["file_name"], "tech-radar-editor.umd.js");
    assert_eq!(artifacts[2]["kind"], "stylesheet");
}

#[test]
fn init_then_check_succeeds() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("tech-radar.toml"));

    bin()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("valid build descriptor"))
        .stderr(predicate::str::contains("es, umd"))
        .stderr(predicate::str::contains("unified"));
}

#[test]
fn check_fails_without_config_file() {
    let dir = tempfile::tempdir().unwrap();

    bin().current_dir(dir.path()).arg("check").assert().failure();
}

#[test]
fn check_rejects_colliding_file_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/main.ts"), "export {};\n").unwrap();
    std::fs::write(
        dir.path().join("tech-radar.toml"),
        r#"
[lib]
entry = "src/main.ts"
formats = ["es", "umd"]
name = "TechRadarEditor"
file_name = "tech-radar-editor.js"
"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("both render to"));
}

#[test]
fn check_rejects_missing_entry() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tech-radar.toml"),
        r#"
[lib]
entry = "src/main.ts"
formats = ["es"]
file_name = "tech-radar-editor.[format].js"
"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry module does not exist"));
}
