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
use crate::error::WorkoutError;
use crate::workout::Running;
use crate::workout::SportsWalking;
use crate::workout::Swimming;
use crate::workout::Workout;
use crate::workout::count;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A raw sensor package: a workout code and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
  pub code: String,
  pub data: Vec<f64>,
}

impl Package {
  pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
    Package {
      code: code.into(),
      data,
    }
  }

  /// Builds the workout described by this package.
  pub fn read(&self) -> Result<Workout, WorkoutError> {
    read_package(&self.code, &self.data)
  }

  /// The batch processed when no other input is given.
  pub fn default_batch() -> Vec<Package> {
    vec![
      Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
      Package::new("RUN", vec![15000.0, 1.0, 75.0]),
      Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
  }
}

/// The supported workout codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
  Swimming,
  Running,
  SportsWalking,
}

impl WorkoutKind {
  pub const ALL: [WorkoutKind; 3] = [
    WorkoutKind::Swimming,
    WorkoutKind::Running,
    WorkoutKind::SportsWalking,
  ];

  /// Short code used in sensor packages.
  pub fn code(self) -> &'static str {
    match self {
      WorkoutKind::Swimming => "SWM",
      WorkoutKind::Running => "RUN",
      WorkoutKind::SportsWalking => "WLK",
    }
  }

  /// Display name, as it appears in reports.
  pub fn name(self) -> &'static str {
    match self {
      WorkoutKind::Swimming => "Swimming",
      WorkoutKind::Running => "Running",
      WorkoutKind::SportsWalking => "SportsWalking",
    }
  }

  /// Positional parameter names, in package order.
  pub fn parameters(self) -> &'static [&'static str] {
    match self {
      WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
      WorkoutKind::Running => &["action", "duration", "weight"],
      WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
    }
  }

  /// Binds `data` positionally to this kind's parameters.
  pub fn build(self, data: &[f64]) -> Result<Workout, WorkoutError> {
    let workout: Workout = match (self, data) {
      (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
        let action = count(self, "action", action)?;
        let count_pool = count(self, "count_pool", count_pool)?;
        Swimming::new(action, duration, weight, length_pool, count_pool)?.into()
      }
      (WorkoutKind::Running, &[action, duration, weight]) => {
        Running::new(count(self, "action", action)?, duration, weight)?.into()
      }
      (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
        SportsWalking::new(count(self, "action", action)?, duration, weight, height)?.into()
      }
      _ => {
        return Err(WorkoutError::InvalidParameterCount {
          code: self.code().to_string(),
          expected: self.parameters().len(),
          got: data.len(),
        });
      }
    };
    Ok(workout)
  }
}

impl FromStr for WorkoutKind {
  type Err = WorkoutError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    WorkoutKind::ALL
      .into_iter()
      .find(|kind| kind.code() == s)
      .ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
  }
}

impl fmt::Display for WorkoutKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// Comma-separated list of every supported code, in table order.
pub fn supported_codes() -> String {
  WorkoutKind::ALL
    .iter()
    .map(|kind| kind.code())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Reads a sensor package and builds the matching workout.
///
/// * `SWM`: strokes, hours, weight, pool length (m), lengths swum.
/// * `RUN`: steps, hours, weight.
/// * `WLK`: steps, hours, weight, height (cm).
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
  workout_type.parse::<WorkoutKind>()?.build(data)
}
