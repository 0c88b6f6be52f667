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
use crate::cli::ReportArgs;
use crate::error::ConfigError;
use crate::package::Package;
use anyhow::Context;
use anyhow::Result;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

/// Prefix of the environment variables read as settings.
pub const ENV_PREFIX: &str = "TRAINLOG_";

/// How report lines are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// The human-readable report line.
  #[default]
  Text,
  /// One JSON object per line.
  Json,
}

/// Fully resolved settings for a report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub format: OutputFormat,
  #[serde(default = "Package::default_batch")]
  pub packages: Vec<Package>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      format: OutputFormat::default(),
      packages: Package::default_batch(),
    }
  }
}

/// Where the `--input` batch comes from.
#[derive(Clone, Copy)]
enum InputSource<'a> {
  Toml(&'a Path),
  Json(&'a Path),
  Tabular(&'a Path),
  Stdin,
}

impl<'a> InputSource<'a> {
  fn detect(path: &'a Path) -> Self {
    if path.as_os_str() == "-" {
      return InputSource::Stdin;
    }
    match path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_ascii_lowercase)
      .as_deref()
    {
      Some("toml") => InputSource::Toml(path),
      Some("json") => InputSource::Json(path),
      _ => InputSource::Tabular(path),
    }
  }
}

impl TryFrom<ReportArgs> for Config {
  type Error = anyhow::Error;

  fn try_from(
    ReportArgs {
      input,
      packages,
      format,
    }: ReportArgs,
  ) -> Result<Self, Self::Error> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    let mut tabular: Option<Vec<Package>> = None;

    if let Some(input) = &input {
      let source = InputSource::detect(input);
      if let InputSource::Toml(path) | InputSource::Json(path) | InputSource::Tabular(path) = source {
        if !path.exists() {
          return Err(ConfigError::InputNotFound(path.to_path_buf()).into());
        }
      }

      match source {
        InputSource::Toml(path) => figment = figment.merge(Toml::file(path)),
        InputSource::Json(path) => figment = figment.merge(Json::file(path)),
        InputSource::Tabular(path) => {
          let file = File::open(path).map_err(|source| ConfigError::ReadInput {
            path: path.to_path_buf(),
            source,
          })?;
          tabular = Some(
            parse_tabular(BufReader::new(file))
              .with_context(|| format!("Failed to parse {}", path.display()))?,
          );
        }
        InputSource::Stdin => {
          tabular = Some(parse_tabular(std::io::stdin().lock()).context("Failed to parse stdin")?);
        }
      }
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&["format"]));

    let mut config: Config = figment.extract().map_err(ConfigError::from)?;

    if let Some(batch) = tabular {
      config.packages = batch;
    }
    if !packages.is_empty() {
      config.packages = packages;
    }
    if let Some(format) = format {
      config.format = format;
    }

    tracing::debug!(
      packages = config.packages.len(),
      format = ?config.format,
      input = ?input.as_ref().map(PathBuf::as_path),
      "Resolved configuration"
    );

    Ok(config)
  }
}

/// Parses `CODE,n1,n2,...` lines. Blank lines and `#` comments are skipped.
pub fn parse_tabular<R: BufRead>(reader: R) -> Result<Vec<Package>, ConfigError> {
  let mut packages = Vec::new();

  for (index, line) in reader.lines().enumerate() {
    let line_no = index + 1;
    let line = line.map_err(|source| ConfigError::ReadInput {
      path: PathBuf::from("-"),
      source,
    })?;
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
      continue;
    }

    let mut fields = trimmed.split(',').map(str::trim);
    let code = fields.next().unwrap_or_default();
    if code.is_empty() {
      return Err(ConfigError::MalformedLine {
        line_no,
        line,
        reason: "missing workout code".to_string(),
      });
    }

    match parse_numbers(fields) {
      Ok(data) => packages.push(Package::new(code, data)),
      Err(reason) => {
        return Err(ConfigError::MalformedLine {
          line_no,
          line,
          reason,
        });
      }
    }
  }

  Ok(packages)
}

/// Parses a `CODE:n1,n2,...` package given on the command line.
pub fn parse_package_spec(spec: &str) -> Result<Package, ConfigError> {
  let malformed = |reason: String| ConfigError::MalformedPackageSpec {
    spec: spec.to_string(),
    reason,
  };

  let Some((code, numbers)) = spec.split_once(':') else {
    return Err(malformed("missing ':' after the workout code".to_string()));
  };
  let code = code.trim();
  if code.is_empty() {
    return Err(malformed("missing workout code".to_string()));
  }

  let data = if numbers.trim().is_empty() {
    Vec::new()
  } else {
    parse_numbers(numbers.split(',').map(str::trim)).map_err(malformed)?
  };

  Ok(Package::new(code, data))
}

fn parse_numbers<'a>(fields: impl Iterator<Item = &'a str>) -> Result<Vec<f64>, String> {
  fields
    .map(|field| {
      field
        .parse::<f64>()
        .map_err(|_| format!("'{field}' is not a number"))
    })
    .collect()
}
