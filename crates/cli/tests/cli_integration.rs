//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `numen` binary and verify exit codes,
//! stdout content, and stderr content.
//!
//! Every command runs inside a fresh temporary directory with the `NUMEN_*`
//! variables cleared, so no stray `numen.toml` or environment leaks in.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NUMEN_VARS: &[&str] = &[
    "NUMEN_LOCALE",
    "NUMEN_MEANINGS",
    "NUMEN_RATE_LIMIT",
    "NUMEN_API_KEY",
    "NUMEN_LOG",
];

/// Helper: create a Command for the `numen` binary, rooted at `dir`.
fn numen(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("numen");
    cmd.current_dir(dir.path());
    for var in NUMEN_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("failed to run numen");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ──────────────────────────────────────────────
// 1. Help, version and types
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pythagorean numerology engine"));
}

#[test]
fn version_exits_0() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numen"));
}

#[test]
fn types_lists_all_nine() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("life-path"))
        .stdout(predicate::str::contains("compatibility"))
        .stdout(predicate::str::contains("personA, personB"));
}

#[test]
fn types_json_has_required_fields() {
    let dir = TempDir::new().unwrap();
    let v = stdout_json(numen(&dir).args(["--output", "json", "types"]));
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 9);
    assert_eq!(arr[0]["type"], "life-path");
    assert_eq!(arr[0]["requiredFields"], serde_json::json!(["birthDate"]));
}

// ──────────────────────────────────────────────
// 2. calc
// ──────────────────────────────────────────────

#[test]
fn calc_life_path_text_uses_turkish_by_default() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["calc", "life-path", "--birth-date", "1990-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("life-path: 3"))
        .stdout(predicate::str::contains("Yaratıcılık"));
}

#[test]
fn calc_json_output_is_result_shape() {
    let dir = TempDir::new().unwrap();
    let v = stdout_json(numen(&dir).args([
        "--output",
        "json",
        "calc",
        "birthday-number",
        "--birth-date",
        "1990-05-29",
    ]));
    assert_eq!(v["number"], 11);
    assert_eq!(v["isMasterNumber"], true);
    assert_eq!(v["type"], "birthday-number");
}

#[test]
fn calc_locale_flag_switches_text() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["--locale", "en", "calc", "life-path", "--birth-date", "1990-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A path of creativity"));
}

#[test]
fn calc_compatibility_with_both_people() {
    let dir = TempDir::new().unwrap();
    let v = stdout_json(numen(&dir).args([
        "--output",
        "json",
        "calc",
        "compatibility",
        "--person-a-name",
        "Ana",
        "--person-a-birth-date",
        "1990-05-15",
        "--person-b-name",
        "Ada",
        "--person-b-birth-date",
        "1990-05-16",
    ]));
    assert_eq!(v["compatibilityScore"], 85);
    assert_eq!(v["number"], 4);
    assert_eq!(v["compatibilityNotes"].as_array().unwrap().len(), 4);
}

#[test]
fn calc_personal_cycles_defaults_target_date() {
    let dir = TempDir::new().unwrap();
    let v = stdout_json(numen(&dir).args([
        "--output",
        "json",
        "calc",
        "personal-cycles",
        "--birth-date",
        "1990-05-15",
    ]));
    assert!(v["personalYear"].is_u64());
    assert!(v["personalDay"].is_u64());
}

#[test]
fn calc_missing_field_exits_1() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["calc", "maturity", "--name", "Ana"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("birthDate"));
}

#[test]
fn calc_unknown_type_exits_1() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["calc", "tarot", "--name", "Ana"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown numerology type: tarot"));
}

#[test]
fn calc_bad_date_json_error() {
    let dir = TempDir::new().unwrap();
    let output = numen(&dir)
        .args(["--output", "json", "calc", "life-path", "--birth-date", "15/05/1990"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(err["error"].as_str().unwrap().contains("15/05/1990"));
}

#[test]
fn calc_quiet_suppresses_errors() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["--quiet", "calc", "life-path"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 3. profile and eval
// ──────────────────────────────────────────────

#[test]
fn profile_json_has_six_numbers() {
    let dir = TempDir::new().unwrap();
    let v = stdout_json(numen(&dir).args([
        "--output",
        "json",
        "profile",
        "--name",
        "Ana",
        "--birth-date",
        "1990-05-29",
    ]));
    assert_eq!(v["lifePath"]["number"], 8);
    assert_eq!(v["expression"]["number"], 7);
    assert_eq!(v["birthday"]["number"], 11);
    assert_eq!(v["maturity"]["number"], 6);
}

#[test]
fn eval_single_request_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("req.json"),
        r#"{"type": "expression-destiny", "fullName": "Ana"}"#,
    )
    .unwrap();
    let v = stdout_json(numen(&dir).args(["--output", "json", "eval", "req.json"]));
    assert_eq!(v["number"], 7);
}

#[test]
fn eval_array_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("reqs.json"),
        r#"[
            {"type": "life-path", "birthDate": "1990-05-15"},
            {"type": "pinnacles-challenges", "birthDate": "1990-05-15"}
        ]"#,
    )
    .unwrap();
    let v = stdout_json(numen(&dir).args(["--output", "json", "eval", "reqs.json"]));
    assert_eq!(v[0]["number"], 3);
    assert_eq!(v[1]["number"], 0);
    assert_eq!(v[1]["pinnacles"].as_array().unwrap().len(), 4);
}

#[test]
fn eval_nonexistent_file_exits_1() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["eval", "missing.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn eval_invalid_request_exits_1() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), r#"{"type": "life-path"}"#).unwrap();
    numen(&dir)
        .args(["eval", "bad.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("birthDate"));
}

// ──────────────────────────────────────────────
// 4. Configuration
// ──────────────────────────────────────────────

#[test]
fn numen_toml_in_working_directory_sets_locale() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("numen.toml"), "[engine]\nlocale = \"en\"\n").unwrap();
    numen(&dir)
        .args(["calc", "life-path", "--birth-date", "1990-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A path of creativity"));
}

#[test]
fn env_locale_overrides_config_and_flag_overrides_env() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("numen.toml"), "[engine]\nlocale = \"tr\"\n").unwrap();
    numen(&dir)
        .env("NUMEN_LOCALE", "en")
        .args(["calc", "life-path", "--birth-date", "1990-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A path of creativity"));
    numen(&dir)
        .env("NUMEN_LOCALE", "en")
        .args(["--locale", "tr", "calc", "life-path", "--birth-date", "1990-05-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yaratıcılık"));
}

#[test]
fn explicit_config_that_does_not_parse_exits_1() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "[engine\n").unwrap();
    numen(&dir)
        .args(["--config", "broken.toml", "types"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not parse"));
}

#[test]
fn replacement_meanings_without_fallbacks_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("meanings.json"),
        r#"{"default_locale": "xx", "fallbacks": {}, "aspects": {}, "notes": {}}"#,
    )
    .unwrap();
    numen(&dir)
        .args(["--meanings", "meanings.json", "types"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid meanings resource"));
}

#[test]
fn serve_rejects_half_tls_config() {
    let dir = TempDir::new().unwrap();
    numen(&dir)
        .args(["serve", "--tls-cert", "cert.pem"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--tls-cert and --tls-key"));
}
