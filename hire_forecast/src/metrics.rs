//! Summary metrics for the hiring dashboard

use crate::data::TimeSeries;
use serde::{Deserialize, Serialize};

/// Sum of hires over the series, `0` when empty
pub fn total(series: &TimeSeries) -> u64 {
    series.total()
}

/// Mean monthly hires with one fractional digit, `"0"` when empty
pub fn average(series: &TimeSeries) -> String {
    series.average()
}

/// Figures shown on the dashboard's summary cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Total hires across the historical series
    pub total_hires: u64,
    /// Mean monthly hires across the historical series
    pub average_hires: String,
    /// Total hires across the predicted series
    pub predicted_hires: u64,
    /// Year the prediction runs through
    pub prediction_year: i32,
}

impl DashboardMetrics {
    /// Compute the summary cards for one generate-then-forecast cycle
    pub fn new(historical: &TimeSeries, predicted: &TimeSeries, prediction_year: i32) -> Self {
        Self {
            total_hires: total(historical),
            average_hires: average(historical),
            predicted_hires: total(predicted),
            prediction_year,
        }
    }
}

impl std::fmt::Display for DashboardMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hiring Metrics:")?;
        writeln!(f, "  Total Hires:            {}", self.total_hires)?;
        writeln!(f, "  Avg. Hires/Month:       {}", self.average_hires)?;
        writeln!(
            f,
            "  Predicted Hires ({}): {}",
            self.prediction_year, self.predicted_hires
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::HiringDataPoint;
    use chrono::NaiveDate;

    #[test]
    fn test_metrics_from_series() {
        let historical = TimeSeries::new(vec![
            HiringDataPoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 50),
            HiringDataPoint::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 51),
        ])
        .unwrap();

        let metrics = DashboardMetrics::new(&historical, &TimeSeries::empty(), 2025);
        assert_eq!(metrics.total_hires, 101);
        assert_eq!(metrics.average_hires, "50.5");
        assert_eq!(metrics.predicted_hires, 0);

        let rendered = metrics.to_string();
        assert!(rendered.contains("Predicted Hires (2025): 0"));
    }
}
