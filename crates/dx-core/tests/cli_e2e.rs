//! CLI end-to-end tests for the `dx` binary.
//!
//! Every test runs in its own temporary directory with an empty XDG config
//! home so user settings on the machine cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Temporary working directory holding a copy of the clinic fixture.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::copy(fixture("clinic.txt"), dir.path().join("clinic.txt")).expect("copy fixture");
    fs::create_dir(dir.path().join("xdg")).expect("xdg dir");
    dir
}

/// Get a Command for the dx binary, isolated from the caller's environment.
fn dx(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dx").expect("dx binary should exist");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("DX_CONFIG")
        .env_remove("DX_LOG")
        .env_remove("DX_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write file");
    path
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    #[test]
    fn writes_legacy_report_next_to_working_directory() {
        let dir = workspace();
        dx(dir.path()).args(["-i", "clinic.txt"]).assert().success();

        let written = fs::read_to_string(dir.path().join("clinic_inference.txt")).unwrap();
        let expected = fs::read_to_string(fixture("clinic_inference.txt")).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn input_directory_is_stripped_from_report_name() {
        let dir = workspace();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::copy(fixture("clinic.txt"), dir.path().join("data").join("ward.v2.txt")).unwrap();

        dx(dir.path())
            .args(["-i", "data/ward.v2.txt"])
            .assert()
            .success();
        assert!(dir.path().join("ward_inference.txt").is_file());
    }

    #[test]
    fn json_to_stdout() {
        let dir = workspace();
        let output = dx(dir.path())
            .args(["-i", "clinic.txt", "--format", "json", "--stdout", "-q"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(value["run_id"].is_string());
        assert!(value["generated_at"].is_string());
        assert_eq!(value["patient_count"], 3);
        assert_eq!(value["patients"][0]["diseases"][0]["posterior"], 0.6923);
        assert!(!dir.path().join("clinic_inference.json").exists());
    }

    #[test]
    fn explicit_output_path() {
        let dir = workspace();
        dx(dir.path())
            .args(["-i", "clinic.txt", "-o", "out/report.md", "-f", "md"])
            .assert()
            .success();
        let text = fs::read_to_string(dir.path().join("out").join("report.md")).unwrap();
        assert!(text.contains("## Patient 3"));
    }

    #[test]
    fn settings_file_controls_format_and_suffix() {
        let dir = workspace();
        write(
            dir.path(),
            "settings.toml",
            "[output]\nformat = \"md\"\nsuffix = \"_dx\"\ndirectory = \"reports\"\n",
        );
        dx(dir.path())
            .args(["-i", "clinic.txt", "--config", "settings.toml"])
            .assert()
            .success();
        assert!(dir.path().join("reports").join("clinic_dx.md").is_file());
    }

    #[test]
    fn xdg_settings_are_picked_up() {
        let dir = workspace();
        fs::create_dir(dir.path().join("xdg").join("dx")).unwrap();
        write(
            &dir.path().join("xdg").join("dx"),
            "settings.toml",
            "[output]\nformat = \"json\"\n",
        );
        dx(dir.path()).args(["-i", "clinic.txt"]).assert().success();
        assert!(dir.path().join("clinic_inference.json").is_file());
    }

    #[test]
    fn check_reports_counts_without_writing() {
        let dir = workspace();
        dx(dir.path())
            .args(["check", "-i", "clinic.txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "ok: 3 diseases, 3 patients, 11 unknown symptoms",
            ));
        assert!(!dir.path().join("clinic_inference.txt").exists());
    }
}

// ============================================================================
// Logging
// ============================================================================

mod logging {
    use super::*;

    fn jsonl_events(stderr: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(stderr)
            .lines()
            .map(|line| serde_json::from_str(line).expect("stderr line is JSON"))
            .collect()
    }

    #[test]
    fn warns_once_per_vector_over_unknown_limit() {
        let dir = workspace();
        write(
            dir.path(),
            "settings.toml",
            "[limits]\nwarn_unknowns_above = 1\n",
        );
        let output = dx(dir.path())
            .args([
                "-i",
                "clinic.txt",
                "--config",
                "settings.toml",
                "--log-format",
                "jsonl",
                "--stdout",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        let warnings: Vec<(String, String, u64)> = jsonl_events(&output.stderr)
            .into_iter()
            .filter(|e| e["fields"]["event"] == "infer.many_unknowns")
            .map(|e| {
                assert_eq!(e["level"], "WARN");
                let fields = &e["fields"];
                (
                    fields["patient"].as_str().unwrap().to_string(),
                    fields["disease"].as_str().unwrap().to_string(),
                    fields["unknowns"].as_u64().unwrap(),
                )
            })
            .collect();
        let expected: [(String, String, u64); 4] = [
            ("1", "Flu", 2),
            ("1", "Strep", 2),
            ("3", "Flu", 3),
            ("3", "Cold", 2),
        ]
        .map(|(p, d, n)| (p.to_string(), d.to_string(), n));
        assert_eq!(warnings, expected);
    }

    #[test]
    fn default_limit_stays_quiet() {
        let dir = workspace();
        let output = dx(dir.path())
            .args(["-i", "clinic.txt", "--log-format", "jsonl", "--stdout"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(jsonl_events(&output.stderr)
            .iter()
            .all(|e| e["fields"]["event"] != "infer.many_unknowns"));
    }

    #[test]
    fn human_timestamps_follow_settings() {
        let dir = workspace();
        let starts_with_timestamp = |stderr: &[u8]| {
            String::from_utf8_lossy(stderr)
                .lines()
                .filter(|line| line.contains("input parsed"))
                .all(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        };

        let output = dx(dir.path()).args(["check", "-i", "clinic.txt"]).output().unwrap();
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("input parsed"));
        assert!(starts_with_timestamp(&output.stderr));

        write(dir.path(), "settings.toml", "[log]\ntimestamps = false\n");
        let output = dx(dir.path())
            .args(["check", "-i", "clinic.txt", "--config", "settings.toml"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        let parsed: Vec<&str> = stderr.lines().filter(|l| l.contains("input parsed")).collect();
        assert_eq!(parsed.len(), 1);
        assert!(!parsed[0].starts_with(|c: char| c.is_ascii_digit()));
    }
}

// ============================================================================
// Errors and exit codes
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn help_exits_clean() {
        let dir = workspace();
        dx(dir.path())
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--input"));
    }

    #[test]
    fn missing_input_flag_is_args_error() {
        let dir = workspace();
        dx(dir.path())
            .assert()
            .code(10)
            .stderr(predicate::str::contains("Invalid Arguments"));
    }

    #[test]
    fn non_txt_input_is_args_error() {
        let dir = workspace();
        write(dir.path(), "clinic.csv", "");
        dx(dir.path())
            .args(["-i", "clinic.csv"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("*.txt"));
    }

    #[test]
    fn unknown_flag_is_args_error() {
        let dir = workspace();
        dx(dir.path()).arg("--bogus").assert().code(10);
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let dir = workspace();
        dx(dir.path())
            .args(["-i", "absent.txt"])
            .assert()
            .code(21)
            .stderr(predicate::str::contains("absent.txt"));
    }

    #[test]
    fn bad_symptom_is_input_error_with_line() {
        let dir = workspace();
        let text = fs::read_to_string(fixture("clinic.txt"))
            .unwrap()
            .replace("['F', 'T']", "['F', 'Y']");
        write(dir.path(), "bad.txt", &text);
        dx(dir.path())
            .args(["-i", "bad.txt"])
            .assert()
            .code(12)
            .stderr(predicate::str::contains("line 22"));
    }

    #[test]
    fn out_of_range_prior_is_model_error() {
        let dir = workspace();
        write(
            dir.path(),
            "model.txt",
            "1 1\nFlu 1 1.5\n['fever']\n[0.9]\n[0.1]\n['T']\n",
        );
        dx(dir.path())
            .args(["-i", "model.txt"])
            .assert()
            .code(13)
            .stderr(predicate::str::contains("prior"));
    }

    #[test]
    fn degenerate_evidence_is_inference_error() {
        let dir = workspace();
        write(
            dir.path(),
            "degenerate.txt",
            "1 1\nCertain 1 1.0\n['never']\n[0.0]\n[0.3]\n['T']\n",
        );
        dx(dir.path())
            .args(["-i", "degenerate.txt"])
            .assert()
            .code(20)
            .stderr(predicate::str::contains("Certain"));
    }

    #[test]
    fn invalid_settings_is_config_error() {
        let dir = workspace();
        write(dir.path(), "settings.toml", "[limits]\nwarn_unknowns_above = 64\n");
        dx(dir.path())
            .args(["-i", "clinic.txt", "--config", "settings.toml"])
            .assert()
            .code(11);
    }

    #[test]
    fn missing_env_settings_is_config_error() {
        let dir = workspace();
        dx(dir.path())
            .env("DX_CONFIG", dir.path().join("nope.toml"))
            .args(["-i", "clinic.txt"])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("nope.toml"));
    }

    #[test]
    fn jsonl_mode_reports_structured_error() {
        let dir = workspace();
        let output = dx(dir.path())
            .args(["-i", "absent.txt", "--log-format", "jsonl"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(21));

        let stderr = String::from_utf8(output.stderr).unwrap();
        let last = stderr.lines().last().unwrap();
        let value: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(value["category"], "io");
        assert_eq!(value["code"], 60);
    }
}
