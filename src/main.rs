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
use Commands::Report;
use Commands::Types;
use anyhow::Result;
use clap::Parser;
use trainlog::cli::Cli;
use trainlog::cli::Commands;
use trainlog::config::Config;
use trainlog::driver::run_reports;
use trainlog::driver::write_workout_types;
use trainlog::logging::setup_tracing;

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli { command } = Cli::parse();
  let main_span = tracing::info_span!("trainlog");
  let _enter = main_span.enter();

  match command {
    Report(report_args) => {
      tracing::info!("Initializing Report Run...");

      let config = Config::try_from(report_args)?;

      let stdout = std::io::stdout();
      let summary = run_reports(&config, &mut stdout.lock())?;

      if !summary.is_success() {
        anyhow::bail!(
          "{} of {} workout packages failed",
          summary.failures.len(),
          summary.total()
        );
      }
    }
    Types => {
      write_workout_types(&mut std::io::stdout().lock())?;
    }
  }

  Ok(())
}
