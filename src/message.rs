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
use serde::Serialize;
use serde::Serializer;
use std::fmt;

/// Summary of a completed training.
///
/// Rendered through [`fmt::Display`] as the fixed report line. The labels are
/// part of the output contract and stay in Russian.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
  /// Display name of the workout variant.
  pub training_type: &'static str,
  /// Hours.
  #[serde(serialize_with = "three_decimals")]
  pub duration: f64,
  /// Kilometers.
  #[serde(serialize_with = "three_decimals")]
  pub distance: f64,
  /// Kilometers per hour.
  #[serde(serialize_with = "three_decimals")]
  pub speed: f64,
  /// Kilocalories.
  #[serde(serialize_with = "three_decimals")]
  pub calories: f64,
}

impl InfoMessage {
  /// Returns the report line.
  pub fn get_message(&self) -> String {
    self.to_string()
  }

  /// Serializes the report as a single JSON object, with the report line under `message`.
  pub fn to_json_line(&self) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct JsonReport<'a> {
      #[serde(flatten)]
      info: &'a InfoMessage,
      message: String,
    }

    serde_json::to_string(&JsonReport {
      info: self,
      message: self.get_message(),
    })
  }
}

impl fmt::Display for InfoMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
      self.training_type, self.duration, self.distance, self.speed, self.calories
    )
  }
}

/// Rounds the same way the text report does so both formats agree.
fn three_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
  let rounded = format!("{value:.3}")
    .parse::<f64>()
    .map_err(<S::Error as serde::ser::Error>::custom)?;
  serializer.serialize_f64(rounded)
}
