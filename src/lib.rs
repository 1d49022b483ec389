//! # hirecast
//!
//! `hirecast` bundles the hiring-series workspace behind one import: the
//! arithmetic in [`math`] and the generator, forecaster and dashboard cycle in
//! [`forecast`].
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use hirecast::{Dashboard, CycleSettings, DashboardParams, TrendMode};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let mut params = DashboardParams::defaults_for(today);
//! params.trend = TrendMode::Up;
//!
//! let settings = CycleSettings {
//!     training_delay: std::time::Duration::ZERO,
//!     ..CycleSettings::default()
//! };
//! let dashboard = Dashboard::new(params, settings);
//! let snapshot = runtime.block_on(dashboard.train_and_predict(today)).unwrap();
//! assert_eq!(snapshot.historical.len(), 13);
//! assert_eq!(snapshot.predicted.len(), 21);
//! ```

pub use hire_forecast as forecast;
pub use hire_math as math;

pub use hire_forecast::{
    months_between, ChartPoint, CycleSettings, Dashboard, DashboardConfig, DashboardMetrics,
    DashboardParams, DashboardSnapshot, Department, ForecastModel, ForecastResult,
    HireForecastError, HiringDataPoint, RandomWalkModel, SeriesKind, TimeSeries,
    TrainedForecastModel, TrendMode, TrendSimulator,
};

/// Generate a history for `params` ending at `now` and forecast it, without
/// the simulated training delay
pub fn generate_and_forecast<R: rand::Rng + ?Sized>(
    params: &DashboardParams,
    now: chrono::NaiveDate,
    rng: &mut R,
) -> Result<(TimeSeries, TimeSeries), HireForecastError> {
    let historical = hire_forecast::dashboard::generate_history(
        params,
        now,
        hire_forecast::simulator::BASELINE_HIRES,
        rng,
    );
    let predicted = hire_forecast::dashboard::predict(&historical, params, now, rng)?;
    Ok((historical, predicted))
}
