//! Quiz configuration, optionally stored in a TOML file (`quiz.toml`).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings for one quiz run.
///
/// Missing fields default to the classic quiz values: `problems.csv`,
/// 30 seconds, sequential order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    /// CSV file with `question,answer` rows.
    pub problems_path: PathBuf,

    /// Session-wide time budget in seconds, started when the user presses enter.
    pub time_limit_secs: u64,

    /// Present questions in random order.
    pub shuffle: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            problems_path: PathBuf::from("problems.csv"),
            time_limit_secs: 30,
            shuffle: false,
        }
    }
}

/// Configuration was loaded but holds unusable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidConfig {
    pub reason: String,
}

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config: {}", self.reason)
    }
}

impl std::error::Error for InvalidConfig {}

/// Largest accepted time limit (about 136 years).
pub const MAX_TIME_LIMIT_SECS: u64 = u32::MAX as u64;

impl QuizConfig {
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs == 0 {
            return Err(InvalidConfig {
                reason: "time_limit_secs must be > 0".to_string(),
            }
            .into());
        }
        if self.time_limit_secs > MAX_TIME_LIMIT_SECS {
            return Err(InvalidConfig {
                reason: format!("time_limit_secs must be <= {MAX_TIME_LIMIT_SECS}"),
            }
            .into());
        }
        if self.problems_path.as_os_str().is_empty() {
            return Err(InvalidConfig {
                reason: "problems_path must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}

/// Values supplied on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub problems_path: Option<PathBuf>,
    pub time_limit_secs: Option<u64>,
    pub shuffle: Option<bool>,
}

/// Apply command-line overrides to the base config and validate the result.
pub fn apply_overrides(mut base: QuizConfig, overrides: &ConfigOverrides) -> Result<QuizConfig> {
    if let Some(path) = &overrides.problems_path {
        base.problems_path = path.clone();
    }
    if let Some(secs) = overrides.time_limit_secs {
        base.time_limit_secs = secs;
    }
    if let Some(shuffle) = overrides.shuffle {
        base.shuffle = shuffle;
    }
    base.validate()?;
    Ok(base)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `QuizConfig::default()`.
pub fn load_config(path: &Path) -> Result<QuizConfig> {
    if !path.exists() {
        let cfg = QuizConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).map_err(|err| InvalidConfig {
        reason: format!("read {}: {err}", path.display()),
    })?;
    let cfg: QuizConfig = toml::from_str(&contents).map_err(|err| InvalidConfig {
        reason: format!("parse {}: {err}", path.display()),
    })?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
