//! Random-walk continuation of a hiring series
//!
//! Stands in for a learned model: one drift coefficient is drawn per run and
//! added at every step together with fresh noise. The historical simulator, by
//! contrast, redraws its whole step every month.

use crate::calendar::{first_of_month, months_after, months_between};
use crate::data::{HiringDataPoint, TimeSeries};
use crate::error::Result;
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use chrono::{Local, NaiveDate};
use rand::Rng;
use std::ops::Range;
use tracing::{debug, warn};

/// Range the per-run trend coefficient is drawn from
pub const TREND_COEFFICIENT_RANGE: Range<f64> = -1.0..2.0;

/// Range the per-step noise is drawn from
pub const STEP_NOISE_RANGE: Range<f64> = -2.0..2.0;

/// Random-walk forecaster
#[derive(Debug, Clone)]
pub struct RandomWalkModel {
    /// Name of the model
    name: String,
    /// Date treated as "today" when there is no history to anchor on
    reference_date: Option<NaiveDate>,
}

/// Trained random-walk forecaster
#[derive(Debug, Clone)]
pub struct TrainedRandomWalk {
    /// Name of the model
    name: String,
    /// Last observed month
    anchor: Option<HiringDataPoint>,
    /// First month of the zero-filled fallback
    fallback_start: NaiveDate,
}

impl RandomWalkModel {
    /// Create a new random-walk model anchored to the local date
    pub fn new() -> Self {
        Self {
            name: "Random Walk (trend coefficient in [-1, 2))".to_string(),
            reference_date: None,
        }
    }

    /// Use `today` instead of the local date for the empty-history fallback
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.reference_date = Some(today);
        self
    }
}

impl Default for RandomWalkModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for RandomWalkModel {
    type Trained = TrainedRandomWalk;

    fn train(&self, history: &TimeSeries) -> Result<Self::Trained> {
        let today = self
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());

        Ok(TrainedRandomWalk {
            name: self.name.clone(),
            anchor: history.last().copied(),
            fallback_start: first_of_month(today),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedRandomWalk {
    /// Last observed point the forecast continues from
    pub fn anchor(&self) -> Option<&HiringDataPoint> {
        self.anchor.as_ref()
    }
}

impl TrainedForecastModel for TrainedRandomWalk {
    fn forecast_until<R: Rng + ?Sized>(
        &self,
        end: NaiveDate,
        rng: &mut R,
    ) -> Result<ForecastResult> {
        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => {
                warn!(
                    from = %self.fallback_start,
                    %end,
                    "no history to forecast from, emitting zero-filled series"
                );
                let points = months_between(self.fallback_start, end)
                    .map(|month| HiringDataPoint::new(month, 0))
                    .collect();
                return Ok(ForecastResult::new(
                    TimeSeries::from_consecutive(points),
                    None,
                ));
            }
        };

        let coefficient = rng.gen_range(TREND_COEFFICIENT_RANGE);
        let months = months_after(anchor.date(), end);
        let mut points = Vec::with_capacity(months.len());
        let mut hires = anchor.hires();

        for month in months {
            let noise = rng.gen_range(STEP_NOISE_RANGE);
            let next = (f64::from(hires) + coefficient + noise).floor();
            // Saturating float-to-int cast; the floor above is already >= 0
            hires = next.max(0.0) as u32;
            points.push(HiringDataPoint::new(month, hires));
        }

        debug!(
            anchor = %anchor.date(),
            %end,
            coefficient,
            months = points.len(),
            "forecast series"
        );

        Ok(ForecastResult::new(
            TimeSeries::from_consecutive(points),
            Some(coefficient),
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Train a [`RandomWalkModel`] on `history` and forecast through `end`
///
/// `today` only matters when `history` is empty: the zero-filled fallback
/// starts at the first of today's month.
pub fn forecast_series<R: Rng + ?Sized>(
    history: &TimeSeries,
    end: NaiveDate,
    today: NaiveDate,
    rng: &mut R,
) -> Result<TimeSeries> {
    let trained = RandomWalkModel::new()
        .with_reference_date(today)
        .train(history)?;
    Ok(trained.forecast_until(end, rng)?.into_series())
}
