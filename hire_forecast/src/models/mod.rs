//! Forecasting models for monthly hiring series

use crate::data::TimeSeries;
use crate::error::Result;
use chrono::NaiveDate;
use rand::Rng;
use std::fmt::Debug;

/// Forecast result containing the predicted months
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// Predicted series, starting after the last observed month
    series: TimeSeries,
    /// Drift added at every step, when the model drew one
    trend_coefficient: Option<f64>,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(series: TimeSeries, trend_coefficient: Option<f64>) -> Self {
        Self {
            series,
            trend_coefficient,
        }
    }

    /// Get the predicted series
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Take ownership of the predicted series
    pub fn into_series(self) -> TimeSeries {
        self.series
    }

    /// Get the trend coefficient, if the model drew one
    pub fn trend_coefficient(&self) -> Option<f64> {
        self.trend_coefficient
    }

    /// Number of months forecasted
    pub fn horizons(&self) -> usize {
        self.series.len()
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Continue the series month by month through `end`
    fn forecast_until<R: Rng + ?Sized>(&self, end: NaiveDate, rng: &mut R)
        -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a hiring series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a historical series
    fn train(&self, history: &TimeSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod random_walk;

pub use random_walk::{forecast_series, RandomWalkModel, TrainedRandomWalk};
