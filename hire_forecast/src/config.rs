//! Dashboard configuration loaded from TOML
//!
//! Every field is optional in the file; missing fields fall back to the
//! dashboard defaults.
//!
//! ```toml
//! training_start = "2024-01-01"
//! prediction_year = 2026
//! trend = "up"
//! department = "Sales"
//! training_delay_ms = 0
//! seed = 42
//! ```

use crate::dashboard::{
    CycleSettings, DashboardParams, Department, DEFAULT_TRAINING_DELAY,
};
use crate::error::{HireForecastError, Result};
use crate::simulator::{TrendMode, BASELINE_HIRES};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "HIRECAST_CONFIG";

/// Reads an environment variable, returning a structured error if it's missing.
pub fn get_env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| HireForecastError::ConfigError(format!("Missing environment variable: {}", name)))
}

/// Settings file for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// First month of the history; defaults to one year before today
    pub training_start: Option<NaiveDate>,
    /// Year the forecast runs through; defaults to next year
    pub prediction_year: Option<i32>,
    pub trend: TrendMode,
    pub department: Department,
    /// Starting hire count of the simulator
    pub baseline: u32,
    /// Simulated training latency in milliseconds
    pub training_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            training_start: None,
            prediction_year: None,
            trend: TrendMode::default(),
            department: Department::default(),
            baseline: BASELINE_HIRES,
            training_delay_ms: DEFAULT_TRAINING_DELAY.as_millis() as u64,
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Load the file named by `HIRECAST_CONFIG`
    pub fn from_env() -> Result<Self> {
        let path = get_env_var(CONFIG_ENV_VAR)?;
        Self::from_file(path)
    }

    /// Parameters for a cycle run on `today`
    pub fn params(&self, today: NaiveDate) -> DashboardParams {
        let defaults = DashboardParams::defaults_for(today);
        DashboardParams {
            training_start: self.training_start.unwrap_or(defaults.training_start),
            prediction_year: self.prediction_year.unwrap_or(defaults.prediction_year),
            trend: self.trend,
            department: self.department,
        }
    }

    /// Non-user tunables of the cycle
    pub fn cycle_settings(&self) -> CycleSettings {
        CycleSettings {
            baseline: self.baseline,
            training_delay: Duration::from_millis(self.training_delay_ms),
            seed: self.seed,
        }
    }
}
