//! Trend-shaped generator for the historical hiring series

use crate::calendar::months_between;
use crate::data::{HiringDataPoint, TimeSeries};
use crate::error::HireForecastError;
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Hires in the month before the first generated month
pub const BASELINE_HIRES: u32 = 50;

/// Qualitative direction of the generated series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMode {
    /// Grows by 1 to 5 hires every month
    Up,
    /// Shrinks by 1 to 5 hires every month, never below zero
    Down,
    /// Moves by at most one hire per month, never below zero
    #[default]
    Stable,
}

impl TrendMode {
    /// All trend modes, in display order
    pub const ALL: [TrendMode; 3] = [TrendMode::Up, TrendMode::Down, TrendMode::Stable];

    /// Apply one month of drift to `hires`
    pub fn step<R: Rng + ?Sized>(self, hires: u32, rng: &mut R) -> u32 {
        match self {
            TrendMode::Up => hires.saturating_add(rng.gen_range(1..=5)),
            TrendMode::Down => hires.saturating_sub(rng.gen_range(1..=5)),
            TrendMode::Stable => match rng.gen_range(-1i32..=1) {
                -1 => hires.saturating_sub(1),
                1 => hires.saturating_add(1),
                _ => hires,
            },
        }
    }

    /// Lowercase name used in configs and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            TrendMode::Up => "up",
            TrendMode::Down => "down",
            TrendMode::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendMode {
    type Err = HireForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "upward" => Ok(TrendMode::Up),
            "down" | "downward" => Ok(TrendMode::Down),
            "stable" | "flat" => Ok(TrendMode::Stable),
            other => Err(HireForecastError::InvalidParameter(format!(
                "Unknown trend mode '{}', expected up, down or stable",
                other
            ))),
        }
    }
}

/// Generates a synthetic historical series under a trend mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendSimulator {
    mode: TrendMode,
    baseline: u32,
}

impl TrendSimulator {
    /// Create a simulator starting from [`BASELINE_HIRES`]
    pub fn new(mode: TrendMode) -> Self {
        Self {
            mode,
            baseline: BASELINE_HIRES,
        }
    }

    /// Override the starting hire count
    pub fn with_baseline(mut self, baseline: u32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Trend mode in use
    pub fn mode(&self) -> TrendMode {
        self.mode
    }

    /// Starting hire count
    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    /// One point per month from the month of `start` through the month of `end`
    ///
    /// The drift is applied before each month is recorded, so the first point
    /// already differs from the baseline. An inverted range yields an empty
    /// series.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        rng: &mut R,
    ) -> TimeSeries {
        let months = months_between(start, end);
        let mut points = Vec::with_capacity(months.len());
        let mut hires = self.baseline;

        for month in months {
            hires = self.mode.step(hires, rng);
            points.push(HiringDataPoint::new(month, hires));
        }

        debug!(
            trend = %self.mode,
            %start,
            %end,
            months = points.len(),
            "generated historical series"
        );

        TimeSeries::from_consecutive(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_trend_mode() {
        assert_eq!("up".parse::<TrendMode>().unwrap(), TrendMode::Up);
        assert_eq!(" Downward ".parse::<TrendMode>().unwrap(), TrendMode::Down);
        assert_eq!("STABLE".parse::<TrendMode>().unwrap(), TrendMode::Stable);
        assert!("sideways".parse::<TrendMode>().is_err());
    }

    #[test]
    fn test_step_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let up = TrendMode::Up.step(50, &mut rng);
            assert!((51..=55).contains(&up));

            let down = TrendMode::Down.step(50, &mut rng);
            assert!((45..=49).contains(&down));

            let stable = TrendMode::Stable.step(50, &mut rng);
            assert!((49..=51).contains(&stable));

            assert_eq!(TrendMode::Down.step(0, &mut rng), 0);
            assert!(TrendMode::Stable.step(0, &mut rng) <= 1);
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let simulator = TrendSimulator::new(TrendMode::Up);
        let a = simulator.generate(ymd(2023, 1, 1), ymd(2023, 12, 1), &mut StdRng::seed_from_u64(1));
        let b = simulator.generate(ymd(2023, 1, 1), ymd(2023, 12, 1), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn test_custom_baseline() {
        let simulator = TrendSimulator::new(TrendMode::Up).with_baseline(200);
        let series = simulator.generate(ymd(2023, 1, 1), ymd(2023, 1, 31), &mut StdRng::seed_from_u64(3));
        let first = series.first().unwrap().hires();
        assert!((201..=205).contains(&first));
    }
}
