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
use crate::config::Config;
use crate::config::OutputFormat;
use crate::error::TrainlogError;
use crate::error::WorkoutError;
use crate::message::InfoMessage;
use crate::package::Package;
use crate::package::WorkoutKind;
use std::io::Write;

/// A package that could not be turned into a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
  /// Position of the package in the batch, starting at 0.
  pub index: usize,
  pub code: String,
  pub error: WorkoutError,
}

/// Outcome of a report run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
  pub reported: usize,
  pub failures: Vec<Failure>,
}

impl RunSummary {
  pub fn is_success(&self) -> bool {
    self.failures.is_empty()
  }

  pub fn total(&self) -> usize {
    self.reported + self.failures.len()
  }
}

/// Main report runner.
///
/// Every package is handled on its own: a package that fails to build is
/// logged and recorded in the summary, and the batch moves on.
pub fn run_reports<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, TrainlogError> {
  let span = tracing::info_span!(
    "run_reports",
    packages = config.packages.len(),
    format = ?config.format
  );
  let _enter = span.enter();

  tracing::info!("--- Processing workout packages ---");
  let mut summary = RunSummary::default();

  for (index, package) in config.packages.iter().enumerate() {
    let package_span = tracing::info_span!("package", index, code = %package.code);
    let _entered = package_span.enter();

    match process_package(package) {
      Ok(info) => {
        write_report(out, &info, config.format)?;
        summary.reported += 1;
      }
      Err(error) => {
        tracing::error!(error = %error, "Skipping workout package");
        summary.failures.push(Failure {
          index,
          code: package.code.clone(),
          error,
        });
      }
    }
  }

  out.flush()?;
  tracing::info!(
    reported = summary.reported,
    failed = summary.failures.len(),
    "--- Report run complete ---"
  );
  Ok(summary)
}

/// Builds the workout for a single package and computes its report.
fn process_package(package: &Package) -> Result<InfoMessage, WorkoutError> {
  let workout = package.read()?;
  let info = workout.show_training_info()?;
  tracing::debug!(
    training = info.training_type,
    distance = info.distance,
    speed = info.speed,
    calories = info.calories,
    "Computed training info"
  );
  Ok(info)
}

fn write_report<W: Write>(out: &mut W, info: &InfoMessage, format: OutputFormat) -> Result<(), TrainlogError> {
  match format {
    OutputFormat::Text => writeln!(out, "{}", info)?,
    OutputFormat::Json => writeln!(out, "{}", info.to_json_line()?)?,
  }
  Ok(())
}

/// Writes one line per supported workout code with its ordered parameters.
pub fn write_workout_types<W: Write>(out: &mut W) -> Result<(), TrainlogError> {
  for kind in WorkoutKind::ALL {
    writeln!(
      out,
      "{}\t{:<14}\t{}",
      kind,
      kind.name(),
      kind.parameters().join(", ")
    )?;
  }
  out.flush()?;
  Ok(())
}
