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
use crate::config::OutputFormat;
use crate::config::parse_package_spec;
use crate::package::Package;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Training reports from raw workout sensor data")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Compute and print a report line for every workout package.
  Report(ReportArgs),

  /// List the supported workout codes and their parameters.
  Types,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
  /// File with workout packages. `.toml` and `.json` files are read as settings,
  /// anything else (or `-` for stdin) as `CODE,n1,n2,...` lines.
  #[arg(long, short)]
  pub input: Option<PathBuf>,

  /// A single workout package, e.g. `RUN:15000,1,75`. Repeatable; replaces the batch.
  #[arg(long = "package", value_name = "SPEC", value_parser = parse_package_spec)]
  pub packages: Vec<Package>,

  /// Output format of the report lines.
  #[arg(long, value_enum)]
  pub format: Option<OutputFormat>,
}
