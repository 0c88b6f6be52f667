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

//! Training variants and the formulas behind their reports.
//!
//! Every variant shares a [`Session`] (action count, duration in hours, weight
//! in kilograms) and implements [`Training`]. Distance and mean speed have
//! default implementations; calories are required of each variant.
//!
//! The numeric constants and the order of operations below match the
//! established fitness formulas and must not be rearranged, otherwise the
//! rounded report values drift.

use crate::error::WorkoutError;
use crate::message::InfoMessage;
use crate::package::WorkoutKind;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Default distance covered by one action (step), in meters.
pub const LEN_STEP: f64 = 0.65;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Fields common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
  action: u64,
  duration: f64,
  weight: f64,
}

impl Session {
  /// `duration` must be strictly positive since mean speed divides by it.
  fn new(kind: WorkoutKind, action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
    Ok(Session {
      action,
      duration: positive(kind, "duration", duration)?,
      weight: non_negative(kind, "weight", weight)?,
    })
  }

  /// Steps or strokes reported by the sensor.
  pub fn action(&self) -> u64 {
    self.action
  }

  /// Duration in hours.
  pub fn duration(&self) -> f64 {
    self.duration
  }

  /// Weight in kilograms.
  pub fn weight(&self) -> f64 {
    self.weight
  }
}

/// Common behavior of all workout variants.
pub trait Training {
  fn kind(&self) -> WorkoutKind;

  /// Display name used in reports.
  fn name(&self) -> &'static str {
    self.kind().name()
  }

  fn session(&self) -> &Session;

  /// Distance covered by one action, in meters.
  fn len_step(&self) -> f64 {
    LEN_STEP
  }

  /// Distance in kilometers.
  fn distance(&self) -> f64 {
    self.session().action() as f64 * self.len_step() / M_IN_KM
  }

  /// Mean speed in km/h.
  fn mean_speed(&self) -> f64 {
    self.distance() / self.session().duration()
  }

  /// Calories spent, in kcal.
  fn spent_calories(&self) -> f64;

  /// Collects the computed metrics into a report.
  ///
  /// Fails if any metric overflowed to infinity or NaN, which finite inputs
  /// can still produce at the edges of the `f64` range.
  fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
    let info = InfoMessage {
      training_type: self.name(),
      duration: self.session().duration(),
      distance: self.distance(),
      speed: self.mean_speed(),
      calories: self.spent_calories(),
    };

    let metrics = [
      ("distance", info.distance),
      ("speed", info.speed),
      ("calories", info.calories),
    ];
    if let Some((metric, value)) = metrics.into_iter().find(|(_, value)| !value.is_finite()) {
      return Err(WorkoutError::NonFiniteMetric {
        code: self.kind().code(),
        metric,
        value,
      });
    }
    Ok(info)
  }
}

/// Running: only the calorie formula differs from the defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
  session: Session,
}

impl Running {
  const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
  const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

  pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
    Ok(Running {
      session: Session::new(WorkoutKind::Running, action, duration, weight)?,
    })
  }
}

impl Training for Running {
  fn kind(&self) -> WorkoutKind {
    WorkoutKind::Running
  }

  fn session(&self) -> &Session {
    &self.session
  }

  fn spent_calories(&self) -> f64 {
    (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
      * self.session.weight
      / M_IN_KM
      * self.session.duration
      * MIN_IN_H
  }
}

/// Race walking. Calories also depend on the athlete's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
  session: Session,
  height: f64,
}

impl SportsWalking {
  const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
  const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
  const KMH_IN_MSEC: f64 = 0.278;
  const CM_IN_M: f64 = 100.0;

  /// `height` is in centimeters and must be strictly positive.
  pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Result<Self, WorkoutError> {
    let kind = WorkoutKind::SportsWalking;
    Ok(SportsWalking {
      session: Session::new(kind, action, duration, weight)?,
      height: positive(kind, "height", height)?,
    })
  }

  pub fn height(&self) -> f64 {
    self.height
  }
}

impl Training for SportsWalking {
  fn kind(&self) -> WorkoutKind {
    WorkoutKind::SportsWalking
  }

  fn session(&self) -> &Session {
    &self.session
  }

  fn spent_calories(&self) -> f64 {
    let speed_msec_squared = (self.mean_speed() * Self::KMH_IN_MSEC).powi(2);
    let duration_min = self.session.duration * MIN_IN_H;
    let height_m = self.height / Self::CM_IN_M;

    (Self::CALORIES_WEIGHT_MULTIPLIER * self.session.weight
      + (speed_msec_squared / height_m) * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.session.weight)
      * duration_min
  }
}

/// Swimming. Mean speed comes from the pool, not from the stroke count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
  session: Session,
  length_pool: f64,
  count_pool: u64,
}

impl Swimming {
  const LEN_STEP: f64 = 1.38;
  const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
  const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

  /// `length_pool` is in meters, `count_pool` is the number of lengths swum.
  pub fn new(
    action: u64,
    duration: f64,
    weight: f64,
    length_pool: f64,
    count_pool: u64,
  ) -> Result<Self, WorkoutError> {
    let kind = WorkoutKind::Swimming;
    Ok(Swimming {
      session: Session::new(kind, action, duration, weight)?,
      length_pool: non_negative(kind, "length_pool", length_pool)?,
      count_pool,
    })
  }

  pub fn length_pool(&self) -> f64 {
    self.length_pool
  }

  pub fn count_pool(&self) -> u64 {
    self.count_pool
  }
}

impl Training for Swimming {
  fn kind(&self) -> WorkoutKind {
    WorkoutKind::Swimming
  }

  fn session(&self) -> &Session {
    &self.session
  }

  fn len_step(&self) -> f64 {
    Self::LEN_STEP
  }

  fn mean_speed(&self) -> f64 {
    self.length_pool * self.count_pool as f64 / M_IN_KM / self.session.duration
  }

  fn spent_calories(&self) -> f64 {
    (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
      * Self::CALORIES_WEIGHT_MULTIPLIER
      * self.session.weight
      * self.session.duration
  }
}

/// A fully built workout of one of the supported kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
  Swimming(Swimming),
  Running(Running),
  SportsWalking(SportsWalking),
}

impl Workout {
  pub fn training(&self) -> &dyn Training {
    match self {
      Workout::Swimming(w) => w,
      Workout::Running(w) => w,
      Workout::SportsWalking(w) => w,
    }
  }

  pub fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
    self.training().show_training_info()
  }
}

impl From<Swimming> for Workout {
  fn from(w: Swimming) -> Self {
    Workout::Swimming(w)
  }
}

impl From<Running> for Workout {
  fn from(w: Running) -> Self {
    Workout::Running(w)
  }
}

impl From<SportsWalking> for Workout {
  fn from(w: SportsWalking) -> Self {
    Workout::SportsWalking(w)
  }
}

fn positive(kind: WorkoutKind, name: &'static str, value: f64) -> Result<f64, WorkoutError> {
  if value.is_finite() && value > 0.0 {
    Ok(value)
  } else {
    Err(WorkoutError::InvalidParameter {
      code: kind.code(),
      name,
      value,
      reason: "must be a finite number greater than zero",
    })
  }
}

fn non_negative(kind: WorkoutKind, name: &'static str, value: f64) -> Result<f64, WorkoutError> {
  if value.is_finite() && value >= 0.0 {
    Ok(value)
  } else {
    Err(WorkoutError::InvalidParameter {
      code: kind.code(),
      name,
      value,
      reason: "must be a finite, non-negative number",
    })
  }
}

/// Largest integer an `f64` holds without losing precision.
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

/// Converts a raw reading into a whole count (steps, strokes, laps).
pub(crate) fn count(kind: WorkoutKind, name: &'static str, value: f64) -> Result<u64, WorkoutError> {
  let value = non_negative(kind, name, value)?;
  if value.fract() != 0.0 || value > MAX_EXACT_COUNT {
    return Err(WorkoutError::InvalidParameter {
      code: kind.code(),
      name,
      value,
      reason: "must be a whole number",
    });
  }
  Ok(value as u64)
}
