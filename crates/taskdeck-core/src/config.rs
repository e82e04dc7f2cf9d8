use std::ops::RangeInclusive;
#[cfg(feature = "fs")]
use std::path::Path;

use anyhow::{
  Context,
  anyhow
};
use chrono::Duration;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_STORAGE_KEY: &str =
  "todo_tasks_v2";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
  pub storage_key:              String,
  pub min_deadline_year:        i32,
  pub max_deadline_year:        i32,
  pub default_deadline_minutes: i64
}

impl Default for TrackerConfig {
  fn default() -> Self {
    Self {
      storage_key:              DEFAULT_STORAGE_KEY
        .to_string(),
      min_deadline_year:        2000,
      max_deadline_year:        2030,
      default_deadline_minutes: 60
    }
  }
}

impl TrackerConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg: TrackerConfig =
      toml::from_str(raw).context(
        "failed to parse tracker config"
      )?;
    cfg.validate()?;
    debug!(
      storage_key = %cfg.storage_key,
      min_year = cfg.min_deadline_year,
      max_year = cfg.max_deadline_year,
      "parsed tracker config"
    );
    Ok(cfg)
  }

  /// Loads `path` if it exists,
  /// otherwise falls back to defaults.
  #[cfg(feature = "fs")]
  #[tracing::instrument]
  pub fn load(
    path: &Path
  ) -> anyhow::Result<Self> {
    if !path.exists() {
      tracing::info!(
        file = %path.display(),
        "tracker config not found; using defaults"
      );
      return Ok(Self::default());
    }

    let raw =
      std::fs::read_to_string(path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;
    tracing::info!(file = %path.display(), "loading tracker config");
    Self::from_toml_str(&raw)
  }

  pub fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.storage_key.trim().is_empty()
    {
      return Err(anyhow!(
        "storage_key must not be empty"
      ));
    }
    if self.min_deadline_year
      > self.max_deadline_year
    {
      return Err(anyhow!(
        "min_deadline_year {} is after \
         max_deadline_year {}",
        self.min_deadline_year,
        self.max_deadline_year
      ));
    }
    if self.default_deadline_minutes
      <= 0
    {
      return Err(anyhow!(
        "default_deadline_minutes must \
         be positive, got {}",
        self.default_deadline_minutes
      ));
    }
    Ok(())
  }

  #[must_use]
  pub fn deadline_years(
    &self
  ) -> RangeInclusive<i32> {
    self.min_deadline_year
      ..=self.max_deadline_year
  }

  #[must_use]
  pub fn default_deadline_offset(
    &self
  ) -> Duration {
    Duration::minutes(
      self.default_deadline_minutes
    )
  }
}
