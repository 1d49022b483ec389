//! # Hire Forecast
//!
//! Synthetic monthly hiring series and a random-walk forecast on top of them.
//!
//! ## Features
//!
//! - First-of-month calendar sequences that never skip or repeat a month
//! - Trend-shaped history generation (up, down, stable)
//! - Random-walk continuation through the end of a target year
//! - Summary metrics and chart data for a dashboard
//! - An async train-and-predict cycle with simulated training latency
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hire_forecast::models::forecast_series;
//! use hire_forecast::simulator::{TrendMode, TrendSimulator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
//!
//! // Generate history
//! let history = TrendSimulator::new(TrendMode::Up).generate(start, today, &mut rng);
//! assert_eq!(history.len(), 12);
//!
//! // Forecast through the end of next year
//! let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
//! let forecast = forecast_series(&history, end, today, &mut rng)?;
//! assert_eq!(forecast.len(), 12);
//!
//! println!("history total {}, forecast total {}", history.total(), forecast.total());
//! # Ok::<(), hire_forecast::HireForecastError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod simulator;
pub mod utils;

// Re-export commonly used types
pub use crate::calendar::{months_between, MonthSequence};
pub use crate::config::DashboardConfig;
pub use crate::dashboard::{
    ChartPoint, CycleSettings, Dashboard, DashboardParams, DashboardSnapshot, Department,
    SeriesKind,
};
pub use crate::data::{HiringDataPoint, TimeSeries};
pub use crate::error::HireForecastError;
pub use crate::metrics::DashboardMetrics;
pub use crate::models::{ForecastModel, ForecastResult, RandomWalkModel, TrainedForecastModel};
pub use crate::simulator::{TrendMode, TrendSimulator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
