//! Dashboard controller: parameters, the generate-then-forecast cycle and
//! chart data
//!
//! The series computations are synchronous. [`Dashboard::train_and_predict`]
//! only adds the simulated training latency and publishes results into shared
//! state; overlapping cycles are not serialized and the last one to finish
//! wins.

use crate::calendar::{end_of_year, first_of_month, months_back, start_of_year};
use crate::data::TimeSeries;
use crate::error::{HireForecastError, Result};
use crate::metrics::DashboardMetrics;
use crate::models::forecast_series;
use crate::simulator::{TrendMode, TrendSimulator, BASELINE_HIRES};
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Earliest training start the date picker accepts
pub const EARLIEST_TRAINING_START: (i32, u32, u32) = (2020, 1, 1);

/// Simulated training latency used by the dashboard
pub const DEFAULT_TRAINING_DELAY: Duration = Duration::from_millis(1500);

/// Department the dashboard is filtered to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Department {
    #[default]
    Engineering,
    Marketing,
    Sales,
    Hr,
    Operations,
}

impl Department {
    /// All departments, in menu order
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Operations,
    ];

    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = HireForecastError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                HireForecastError::InvalidParameter(format!("Unknown department '{}'", wanted))
            })
    }
}

impl TryFrom<String> for Department {
    type Error = HireForecastError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Department> for String {
    fn from(department: Department) -> Self {
        department.as_str().to_string()
    }
}

/// User-selected inputs for one cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardParams {
    /// First month of the generated history
    pub training_start: NaiveDate,
    /// Year the forecast runs through (inclusive)
    pub prediction_year: i32,
    /// Direction of the generated history
    pub trend: TrendMode,
    /// Department label for the view
    pub department: Department,
}

impl DashboardParams {
    /// Dashboard defaults relative to `today`
    ///
    /// History starts on the first of the month one year back and the
    /// forecast runs through next year.
    pub fn defaults_for(today: NaiveDate) -> Self {
        Self {
            training_start: months_back(today, 12).unwrap_or_else(|| first_of_month(today)),
            prediction_year: today.year() + 1,
            trend: TrendMode::default(),
            department: Department::default(),
        }
    }

    /// Last day the forecast covers: December 31st of the prediction year
    pub fn prediction_end(&self) -> NaiveDate {
        end_of_year(self.prediction_year).unwrap_or(if self.prediction_year > 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        })
    }

    /// Check the parameters the way the input controls constrain them
    ///
    /// The series functions accept any values; this is for callers taking
    /// user input.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.prediction_year < today.year() {
            return Err(HireForecastError::ValidationError(format!(
                "Prediction year {} is before the current year {}",
                self.prediction_year,
                today.year()
            )));
        }

        let (y, m, d) = EARLIEST_TRAINING_START;
        let earliest = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
        if self.training_start < earliest || self.training_start > today {
            return Err(HireForecastError::ValidationError(format!(
                "Training start {} must be between {} and {}",
                self.training_start, earliest, today
            )));
        }

        Ok(())
    }
}

/// Which series a chart point came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Historical,
    Predicted,
}

/// One point handed to the chart renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub hires: u32,
    pub kind: SeriesKind,
}

/// Historical then predicted points, limited to the visible window
///
/// The window runs from January 1st of the earlier of the training-start year
/// and the prediction year to December 31st of the prediction year.
pub fn chart_data(
    historical: &TimeSeries,
    predicted: &TimeSeries,
    params: &DashboardParams,
) -> Vec<ChartPoint> {
    let first_year = params.training_start.year().min(params.prediction_year);
    let window_start = start_of_year(first_year).unwrap_or(NaiveDate::MIN);
    let window_end = params.prediction_end();

    let tagged = |series: &TimeSeries, kind: SeriesKind| {
        series
            .iter()
            .map(|p| ChartPoint {
                date: p.date(),
                hires: p.hires(),
                kind,
            })
            .collect::<Vec<_>>()
    };

    tagged(historical, SeriesKind::Historical)
        .into_iter()
        .chain(tagged(predicted, SeriesKind::Predicted))
        .filter(|p| p.date >= window_start && p.date <= window_end)
        .collect()
}

/// Generate the historical series for `params`, ending at `now`
pub fn generate_history<R: Rng + ?Sized>(
    params: &DashboardParams,
    now: NaiveDate,
    baseline: u32,
    rng: &mut R,
) -> TimeSeries {
    TrendSimulator::new(params.trend)
        .with_baseline(baseline)
        .generate(params.training_start, now, rng)
}

/// Forecast from `historical` through the end of the prediction year
pub fn predict<R: Rng + ?Sized>(
    historical: &TimeSeries,
    params: &DashboardParams,
    now: NaiveDate,
    rng: &mut R,
) -> Result<TimeSeries> {
    forecast_series(historical, params.prediction_end(), now, rng)
}

/// Tunables of the cycle that are not user inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSettings {
    /// Starting hire count of the simulator
    pub baseline: u32,
    /// Simulated training latency
    pub training_delay: Duration,
    /// Seed for reproducible runs; each cycle offsets it by its number
    pub seed: Option<u64>,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            baseline: BASELINE_HIRES,
            training_delay: DEFAULT_TRAINING_DELAY,
            seed: None,
        }
    }
}

/// What the dashboard currently shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub params: DashboardParams,
    /// "Today" of the cycle that produced the series
    pub generated_on: Option<NaiveDate>,
    pub historical: TimeSeries,
    pub predicted: TimeSeries,
    /// True while at least one cycle is waiting on its training delay
    pub loading: bool,
}

impl DashboardSnapshot {
    fn new(params: DashboardParams) -> Self {
        Self {
            params,
            generated_on: None,
            historical: TimeSeries::empty(),
            predicted: TimeSeries::empty(),
            loading: false,
        }
    }

    /// Summary cards for the current series
    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::new(
            &self.historical,
            &self.predicted,
            self.params.prediction_year,
        )
    }

    /// Points for the chart renderer
    pub fn chart_data(&self) -> Vec<ChartPoint> {
        chart_data(&self.historical, &self.predicted, &self.params)
    }
}

/// Marks one cycle as pending until dropped
///
/// A cycle whose future is dropped during its training delay still releases
/// its slot, so `loading` cannot stay set after the cycle is gone.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Shared dashboard state driven by train-and-predict cycles
///
/// Cloning is cheap and clones share state, so a cycle can be spawned onto
/// the runtime while the caller keeps reading snapshots.
#[derive(Debug, Clone)]
pub struct Dashboard {
    state: Arc<RwLock<DashboardSnapshot>>,
    settings: Arc<CycleSettings>,
    cycles: Arc<AtomicU64>,
    in_flight: Arc<AtomicUsize>,
}

impl Dashboard {
    /// Create a dashboard with no series yet
    pub fn new(params: DashboardParams, settings: CycleSettings) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardSnapshot::new(params))),
            settings: Arc::new(settings),
            cycles: Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Cycle settings in use
    pub fn settings(&self) -> &CycleSettings {
        &self.settings
    }

    /// Copy of what the dashboard currently shows
    pub async fn snapshot(&self) -> DashboardSnapshot {
        let mut snapshot = self.state.read().await.clone();
        snapshot.loading = self.is_loading().await;
        snapshot
    }

    /// Whether a cycle is still waiting on its training delay
    pub async fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Replace the parameters used by the next cycle
    pub async fn set_params(&self, params: DashboardParams) {
        self.state.write().await.params = params;
    }

    /// Regenerate history up to `now`, wait out the training delay, forecast
    ///
    /// The new history is published immediately; the forecast is published
    /// together with the history it was derived from once the delay elapses.
    /// Dropping the returned future during the delay abandons the forecast
    /// but leaves the published history in place.
    pub async fn train_and_predict(&self, now: NaiveDate) -> Result<DashboardSnapshot> {
        let cycle = self.cycles.fetch_add(1, Ordering::Relaxed);
        let mut rng = match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(cycle)),
            None => StdRng::from_entropy(),
        };

        let pending = InFlight::enter(&self.in_flight);
        let (params, historical) = {
            let mut state = self.state.write().await;
            let params = state.params.clone();
            let historical = generate_history(&params, now, self.settings.baseline, &mut rng);

            info!(
                cycle,
                trend = %params.trend,
                department = %params.department,
                prediction_year = params.prediction_year,
                months = historical.len(),
                "training started"
            );

            state.historical = historical.clone();
            state.generated_on = Some(now);
            (params, historical)
        };

        tokio::time::sleep(self.settings.training_delay).await;

        let predicted = predict(&historical, &params, now, &mut rng);

        let mut state = self.state.write().await;
        drop(pending);
        let predicted = predicted?;

        info!(cycle, months = predicted.len(), "prediction published");

        state.params = params;
        state.historical = historical;
        state.predicted = predicted;
        state.generated_on = Some(now);

        let mut snapshot = state.clone();
        snapshot.loading = self.in_flight.load(Ordering::SeqCst) > 0;
        Ok(snapshot)
    }
}
