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
use crate::package::supported_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing a report run (src/driver.rs).
#[derive(Error, Debug)]
pub enum TrainlogError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

/// Errors raised while turning a workout package into a training (src/package.rs, src/workout.rs).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
  #[error("Unknown workout type '{0}'. Expected one of: {codes}", codes = supported_codes())]
  UnknownWorkoutType(String),

  #[error("Invalid parameter count for '{code}': expected {expected}, got {got}")]
  InvalidParameterCount {
    code: String,
    expected: usize,
    got: usize,
  },

  #[error("Invalid value {value} for parameter '{name}' of '{code}': {reason}")]
  InvalidParameter {
    code: &'static str,
    name: &'static str,
    value: f64,
    reason: &'static str,
  },

  #[error("Computed {metric} for '{code}' is not a finite number ({value}); inputs are out of range")]
  NonFiniteMetric {
    code: &'static str,
    metric: &'static str,
    value: f64,
  },
}

/// Errors related to resolving the input batch and settings (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Input file not found: {0}")]
  InputNotFound(PathBuf),

  #[error("Failed to read input: {path}")]
  ReadInput {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Malformed input on line {line_no}: {reason}: {line:?}")]
  MalformedLine {
    line_no: usize,
    line: String,
    reason: String,
  },

  #[error("Malformed package '{spec}': {reason}. Expected CODE:n1,n2,...")]
  MalformedPackageSpec { spec: String, reason: String },

  #[error("Failed to load settings: {0}")]
  Extract(#[from] figment::Error),
}
