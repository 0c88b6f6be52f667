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

//! # Trainlog
//!
//! `trainlog` turns raw workout sensor packages into training reports.
//! A package is a short workout code (`SWM`, `RUN` or `WLK`) plus a flat list
//! of readings; each one becomes a line with the duration, distance, mean speed
//! and calories spent.
//!
//! This crate contains the library logic for the `trainlog` CLI, but the
//! calculation modules (`workout`, `package`, `message`) work on their own:
//!
//! ```
//! use trainlog::package::read_package;
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! let info = workout.show_training_info().unwrap();
//! assert_eq!(format!("{:.3}", info.distance), "9.750");
//! ```
//!
//! ## Core Modules
//!
//! * [`workout`]: The [`workout::Training`] trait, the shared
//!   [`workout::Session`] and the three variants with their formulas.
//! * [`package`]: Maps a workout code to its variant and binds the readings
//!   positionally (`read_package`).
//! * [`message`]: The `InfoMessage` report and its fixed text template.
//! * [`driver`]: Runs a batch of packages and writes one line per package.
//! * [`config`]: Resolves the batch and output format from defaults, input
//!   files, environment and CLI flags.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod message;
pub mod package;
pub mod workout;
