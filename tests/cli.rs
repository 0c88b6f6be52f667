// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

use serde_json::Value;

const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";
const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.";
const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.";

fn trainlog_with_stdin(input: &str) -> assert_cmd::Command {
  let mut cmd = assert_cmd::Command::from_std(trainlog());
  cmd.arg("report").arg("--input").arg("-").write_stdin(input);
  cmd
}

fn trainlog() -> Command {
  let mut cmd = Command::new(cargo::cargo_bin!("trainlog"));
  cmd
    .env("CLICOLOR", "0")
    .env_remove("RUST_LOG")
    .env_remove("TRAINLOG_FORMAT")
    .env_remove("TRAINLOG_LOG_FILE");
  cmd
}

#[test]
fn test_report_default_batch() {
  let mut cmd = trainlog();
  cmd.arg("report");

  cmd
    .assert()
    .success()
    .stdout(predicate::str::diff(format!("{SWIMMING_LINE}\n{RUNNING_LINE}\n{WALKING_LINE}\n")))
    .stderr(predicate::str::contains("Report run complete"));
}

#[test]
fn test_report_packages_from_args() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--package")
    .arg("RUN:15000,1,75");

  cmd.assert().success().stdout(predicate::str::diff(format!("{RUNNING_LINE}\n")));
}

#[test]
fn test_report_continues_past_bad_package() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--package")
    .arg("XYZ:1,2,3")
    .arg("--package")
    .arg("WLK:9000,1,75,180");

  cmd
    .assert()
    .failure()
    .stdout(predicate::str::diff(format!("{WALKING_LINE}\n")))
    .stderr(predicate::str::contains("Unknown workout type 'XYZ'"))
    .stderr(predicate::str::contains("1 of 2 workout packages failed"));
}

#[test]
fn test_report_rejects_wrong_parameter_count() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--package")
    .arg("RUN:15000,1,75,180");

  cmd
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains(
      "Invalid parameter count for 'RUN': expected 3, got 4",
    ));
}

#[test]
fn test_report_rejects_zero_height() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--package")
    .arg("WLK:9000,1,75,0");

  cmd
    .assert()
    .failure()
    .stderr(predicate::str::contains("parameter 'height' of 'WLK'"));
}

#[test]
fn test_report_rejects_overflowing_package() {
  let mut cmd = trainlog_with_stdin("SWM,0,1,0,1e308,10\nRUN,1000,1e-310,75\nRUN,15000,1,75\n");

  cmd
    .assert()
    .failure()
    .stdout(predicate::str::diff(format!("{RUNNING_LINE}\n")))
    .stderr(predicate::str::contains("Computed speed for 'SWM' is not a finite number"))
    .stderr(predicate::str::contains("Computed speed for 'RUN' is not a finite number"))
    .stderr(predicate::str::contains("2 of 3 workout packages failed"));
}

#[test]
fn test_malformed_package_spec() {
  let mut cmd = trainlog();
  cmd.arg("report").arg("--package").arg("RUN 15000 1 75");

  cmd
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing ':'"));
}

#[test]
fn test_report_json_format() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--format")
    .arg("json")
    .arg("--package")
    .arg("SWM:720,1,80,25,40");

  let output = cmd.assert().success().get_output().stdout.clone();
  let line = String::from_utf8(output).unwrap();
  let value: Value = serde_json::from_str(line.trim()).unwrap();

  assert_eq!(value["training_type"], "Swimming");
  assert_eq!(value["distance"], 0.994);
  assert_eq!(value["speed"], 1.0);
  assert_eq!(value["calories"], 336.0);
  assert_eq!(value["message"], SWIMMING_LINE);
}

#[test]
fn test_format_from_env() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--package")
    .arg("RUN:15000,1,75")
    .env("TRAINLOG_FORMAT", "json");

  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""training_type":"Running""#));
}

#[test]
fn test_report_toml_input() {
  let temp = tempdir().unwrap();
  let input = temp.path().join("batch.toml");
  fs::write(
    &input,
    r#"
format = "text"

[[packages]]
code = "WLK"
data = [9000, 1, 75, 180]

[[packages]]
code = "RUN"
data = [15000, 1, 75]
"#,
  )
  .unwrap();

  let mut cmd = trainlog();
  cmd.arg("report").arg("--input").arg(&input);

  cmd
    .assert()
    .success()
    .stdout(predicate::str::diff(format!("{WALKING_LINE}\n{RUNNING_LINE}\n")));
}

#[test]
fn test_report_json_input_with_format_override() {
  let temp = tempdir().unwrap();
  let input = temp.path().join("batch.json");
  fs::write(
    &input,
    r#"{"format": "json", "packages": [{"code": "RUN", "data": [15000, 1, 75]}]}"#,
  )
  .unwrap();

  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--input")
    .arg(&input)
    .arg("--format")
    .arg("text");

  cmd.assert().success().stdout(predicate::str::diff(format!("{RUNNING_LINE}\n")));
}

#[test]
fn test_report_tabular_file() {
  let temp = tempdir().unwrap();
  let input = temp.path().join("packages.csv");
  fs::write(&input, "# code,data\nSWM,720,1,80,25,40\n\nRUN,15000,1,75\n").unwrap();

  let mut cmd = trainlog();
  cmd.arg("report").arg("-i").arg(&input);

  cmd
    .assert()
    .success()
    .stdout(predicate::str::diff(format!("{SWIMMING_LINE}\n{RUNNING_LINE}\n")));
}

#[test]
fn test_report_tabular_stdin() {
  let mut cmd = trainlog_with_stdin("WLK,9000,1,75,180\n");

  cmd.assert().success().stdout(predicate::str::diff(format!("{WALKING_LINE}\n")));
}

#[test]
fn test_report_malformed_tabular_line() {
  let mut cmd = trainlog_with_stdin("RUN,15000,1,75\nRUN,fast,1,75\n");

  cmd
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_report_missing_input() {
  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--input")
    .arg("does_not_exist.toml");

  cmd
    .assert()
    .failure()
    .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_log_file() {
  let temp = tempdir().unwrap();
  let log_file = temp.path().join("trainlog.log");

  let mut cmd = trainlog();
  cmd
    .arg("report")
    .arg("--package")
    .arg("RUN:15000,1,75")
    .env("TRAINLOG_LOG_FILE", &log_file);

  cmd
    .assert()
    .success()
    .stdout(predicate::str::diff(format!("{RUNNING_LINE}\n")))
    .stderr(predicate::str::is_empty());

  let logs = fs::read_to_string(&log_file).unwrap();
  assert!(logs.contains("Report run complete"));
}

#[test]
fn test_types() {
  let mut cmd = trainlog();
  cmd.arg("types");

  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains("SWM\tSwimming"))
    .stdout(predicate::str::contains("action, duration, weight, length_pool, count_pool"))
    .stdout(predicate::str::contains("RUN\tRunning"))
    .stdout(predicate::str::contains("WLK\tSportsWalking"))
    .stdout(predicate::str::contains("action, duration, weight, height"));
}
