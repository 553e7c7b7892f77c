//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HIGH_CS_ANSWERS: &str = "2,0,1,0,0,0,0,0,0,0";
const MEDIUM_CS_ANSWERS: &str = "2,0,0,1,1,1,1,1,1,1";

/// A `careerfit` command isolated from the caller's config and environment.
fn careerfit(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("careerfit").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("CAREERFIT_CATALOG")
        .env_remove("CAREERFIT_CITY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aptitude tests and degree guidance"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("careerfit"));
}

#[test]
fn evaluate_strong_answers_as_json() {
    let dir = TempDir::new().unwrap();
    let output = careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--answers", HIGH_CS_ANSWERS])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["degree_id"], "bscs");
    assert_eq!(json["test_id"], "cs-aptitude");
    assert_eq!(json["result"]["tier"], "high");
    assert_eq!(json["result"]["max_score"], 100);
    assert_eq!(json["result"]["alternative_degrees"], serde_json::json!([]));
    let score = json["result"]["score"].as_f64().unwrap();
    assert!((score - 86.666).abs() < 0.01);
}

#[test]
fn evaluate_text_with_city_lists_programs() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--answers", MEDIUM_CS_ANSWERS])
        .args(["--city", "lahore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 53 / 100 (medium)"))
        .stdout(predicate::str::contains("BS Information Technology"))
        .stdout(predicate::str::contains("BS Software Engineering"))
        .stdout(predicate::str::contains("University of Central Punjab"));
}

#[test]
fn evaluate_lenient_unanswered_suggests_business() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--lenient"])
        .args(["--answers", "-,-,-,-,-,-,-,-,-,-"])
        .args(["--city", "Lahore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(low)"))
        .stdout(predicate::str::contains(
            "BBA (Bachelor of Business Administration)",
        ))
        .stdout(predicate::str::contains("University of Central Punjab").not());
}

#[test]
fn evaluate_rejects_unanswered_questions() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs"])
        .args(["--answers", "2,0,1,0,0,-1,0,0,0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "please answer all questions before submitting",
        ));
}

#[test]
fn evaluate_rejects_out_of_range_options() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--format", "json"])
        .args(["--answers", "9,9,9,9,9,9,9,9,9,9"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "please choose a valid option for question 1",
        ));
}

#[test]
fn evaluate_lenient_scores_out_of_range_options_as_wrong() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--lenient"])
        .args(["--answers", "9,9,9,9,9,9,9,9,9,9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0 / 100 (low)"));
}

#[test]
fn evaluate_rejects_wrong_answer_count() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--answers", "2,0,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 10, got 3"));
}

#[test]
fn evaluate_lenient_pads_short_answers() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--answers", "2,0,1", "--lenient"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 60 / 100 (medium)"));
}

#[test]
fn evaluate_unknown_degree() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "mbbs", "--answers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no aptitude test for degree 'mbbs'"));
}

#[test]
fn evaluate_saves_and_show_reloads() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["evaluate", "--degree", "bsse", "--answers", "3,0,0,0,0"])
        .args(["--output", "results"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Submission saved to"))
        .stderr(predicate::str::contains("Results page"));

    let saved: Vec<_> = std::fs::read_dir(dir.path().join("results"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 2);
    let submission = saved
        .iter()
        .find(|p| p.extension().is_some_and(|e| e == "json"))
        .unwrap();
    let html = saved
        .iter()
        .find(|p| p.extension().is_some_and(|e| e == "html"))
        .unwrap();
    assert!(std::fs::read_to_string(html)
        .unwrap()
        .contains("BS Software Engineering"));

    careerfit(&dir)
        .arg("show")
        .arg("--submission")
        .arg(submission)
        .args(["--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Areas for Improvement"));
}

#[test]
fn questions_hide_correct_answers() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["questions", "--degree", "bsse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 questions)"))
        .stdout(predicate::str::contains("[0]"))
        .stdout(predicate::str::contains("correct").not());
}

#[test]
fn degrees_filtered_by_background() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["degrees", "--background", "icom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BBA (Bachelor of Business Administration)"))
        .stdout(predicate::str::contains("BS Computer Science").not());
}

#[test]
fn degrees_unknown_background() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["degrees", "--background", "matric"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown educational background"));
}

#[test]
fn programs_in_city() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["programs", "--degree", "bscs", "--city", "Gujrat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("University of Gujrat"));

    careerfit(&dir)
        .args(["programs", "--degree", "bscs", "--city", "Karachi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No BS Computer Science programs found in Karachi"));
}

#[test]
fn init_creates_files_and_skips_existing() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created careerfit.toml"))
        .stdout(predicate::str::contains("Created catalog/reference.toml"));
    assert!(dir.path().join("careerfit.toml").exists());
    assert!(dir.path().join("catalog/reference.toml").exists());

    careerfit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn validate_initialized_catalog() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir).arg("init").assert().success();
    careerfit(&dir)
        .args(["validate", "--catalog", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 degrees, 2 tests, 3 universities"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("bad.toml"),
        r#"
[[degrees]]
id = "bscs"
name = "BS Computer Science"
suitable_for = ["nowhere"]
"#,
    )
    .unwrap();
    careerfit(&dir)
        .args(["validate", "--catalog", "bad.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .args(["validate", "--catalog", "missing.toml"])
        .assert()
        .failure();
}

#[test]
fn status_follows_profile_flow() {
    let dir = TempDir::new().unwrap();
    careerfit(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Next step: choose your educational background",
        ));

    std::fs::write(
        dir.path().join("careerfit.toml"),
        r#"
output_dir = "results"

[profile]
name = "Ayesha"
email = "ayesha@example.com"
city = "Lahore"
educational_background = "ics"
selected_degree = "bscs"
"#,
    )
    .unwrap();
    careerfit(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student: Ayesha"))
        .stdout(predicate::str::contains("Email: ayesha@example.com"))
        .stdout(predicate::str::contains("Next step: take the aptitude test"));

    careerfit(&dir)
        .args(["evaluate", "--degree", "bscs", "--answers", HIGH_CS_ANSWERS])
        .args(["--output", "results"])
        .assert()
        .success()
        .stdout(predicate::str::contains("University of Central Punjab"));
    careerfit(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest result: cs-aptitude: high (87 / 100)"))
        .stdout(predicate::str::contains("Next step: view your test results"));
}
