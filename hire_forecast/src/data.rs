//! Monthly hiring series

use crate::calendar::{first_of_month, next_month};
use crate::error::{HireForecastError, Result};
use chrono::{Datelike, NaiveDate};
use hire_math::HiresSummary;
use serde::{Deserialize, Serialize};

/// Hires recorded (or simulated) for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PointRecord")]
pub struct HiringDataPoint {
    date: NaiveDate,
    hires: u32,
}

/// Wire form of a point; deserialized dates go through month normalization
#[derive(Deserialize)]
struct PointRecord {
    date: NaiveDate,
    hires: u32,
}

impl From<PointRecord> for HiringDataPoint {
    fn from(record: PointRecord) -> Self {
        HiringDataPoint::new(record.date, record.hires)
    }
}

impl HiringDataPoint {
    /// Create a point for the month containing `date`
    pub fn new(date: NaiveDate, hires: u32) -> Self {
        Self {
            date: first_of_month(date),
            hires,
        }
    }

    /// First day of the month this point covers
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Number of hires in the month
    pub fn hires(&self) -> u32 {
        self.hires
    }

    /// Month key as an ISO `YYYY-MM-DD` string
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Ordered monthly series with no gaps and no duplicate months
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeSeries {
    points: Vec<HiringDataPoint>,
}

impl TimeSeries {
    /// Create a series, checking that consecutive points are one month apart
    pub fn new(points: Vec<HiringDataPoint>) -> Result<Self> {
        let points: Vec<HiringDataPoint> = points
            .into_iter()
            .map(|p| HiringDataPoint::new(p.date, p.hires))
            .collect();

        for pair in points.windows(2) {
            let expected = next_month(pair[0].date);
            if expected != Some(pair[1].date) {
                return Err(HireForecastError::DataError(format!(
                    "Series must advance one month at a time: {} is followed by {}",
                    pair[0].month_key(),
                    pair[1].month_key()
                )));
            }
        }

        Ok(Self { points })
    }

    /// An empty series
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from months the caller guarantees are consecutive
    pub(crate) fn from_consecutive(points: Vec<HiringDataPoint>) -> Self {
        debug_assert!(points
            .windows(2)
            .all(|pair| next_month(pair[0].date) == Some(pair[1].date)));
        Self { points }
    }

    /// All points in month order
    pub fn points(&self) -> &[HiringDataPoint] {
        &self.points
    }

    /// Iterate over points in month order
    pub fn iter(&self) -> std::slice::Iter<'_, HiringDataPoint> {
        self.points.iter()
    }

    /// Hire counts in month order
    pub fn hires(&self) -> Vec<u32> {
        self.points.iter().map(HiringDataPoint::hires).collect()
    }

    /// Months covered, in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(HiringDataPoint::date).collect()
    }

    /// First point, if any
    pub fn first(&self) -> Option<&HiringDataPoint> {
        self.points.first()
    }

    /// Last point, if any
    pub fn last(&self) -> Option<&HiringDataPoint> {
        self.points.last()
    }

    /// Point for the month containing `date`
    pub fn get(&self, date: NaiveDate) -> Option<&HiringDataPoint> {
        let month = first_of_month(date);
        self.points
            .binary_search_by_key(&month, HiringDataPoint::date)
            .ok()
            .map(|idx| &self.points[idx])
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of months in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Sum of all hires, `0` when empty
    pub fn total(&self) -> u64 {
        hire_math::total(self.points.iter().map(HiringDataPoint::hires))
    }

    /// Mean monthly hires with one fractional digit, `"0"` when empty
    pub fn average(&self) -> String {
        hire_math::format_average(self.total(), self.len())
    }

    /// Mean monthly hires, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        hire_math::average(self.points.iter().map(HiringDataPoint::hires))
    }

    /// Spread and range of the hire counts
    pub fn summary(&self) -> Result<HiresSummary> {
        Ok(hire_math::summarize(&self.hires())?)
    }

    /// Points falling in calendar `year`
    pub fn for_year(&self, year: i32) -> Self {
        Self::from_consecutive(
            self.points
                .iter()
                .filter(|p| p.date.year() == year)
                .copied()
                .collect(),
        )
    }

    /// Serialize the series as a JSON array of `{date, hires}` objects
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.points)?)
    }
}

impl<'de> Deserialize<'de> for TimeSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<HiringDataPoint>::deserialize(deserializer)?;
        TimeSeries::new(points).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a HiringDataPoint;
    type IntoIter = std::slice::Iter<'a, HiringDataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_point_normalizes_to_month() {
        let point = HiringDataPoint::new(ymd(2024, 2, 29), 12);
        assert_eq!(point.date(), ymd(2024, 2, 1));
        assert_eq!(point.month_key(), "2024-02-01");
    }

    #[test]
    fn test_deserialized_point_normalizes_to_month() {
        let point: HiringDataPoint =
            serde_json::from_str(r#"{"date":"2024-02-15","hires":9}"#).unwrap();
        assert_eq!(point, HiringDataPoint::new(ymd(2024, 2, 1), 9));
        assert_eq!(point.month_key(), "2024-02-01");
    }

    #[test]
    fn test_new_rejects_gaps_and_duplicates() {
        let gap = vec![
            HiringDataPoint::new(ymd(2023, 1, 1), 1),
            HiringDataPoint::new(ymd(2023, 3, 1), 1),
        ];
        assert!(TimeSeries::new(gap).is_err());

        let dup = vec![
            HiringDataPoint::new(ymd(2023, 1, 1), 1),
            HiringDataPoint::new(ymd(2023, 1, 15), 1),
        ];
        assert!(TimeSeries::new(dup).is_err());

        let ok = vec![
            HiringDataPoint::new(ymd(2023, 12, 1), 1),
            HiringDataPoint::new(ymd(2024, 1, 1), 1),
        ];
        assert_eq!(TimeSeries::new(ok).unwrap().len(), 2);
    }

    #[test]
    fn test_get_and_for_year() {
        let series = TimeSeries::new(vec![
            HiringDataPoint::new(ymd(2023, 11, 1), 4),
            HiringDataPoint::new(ymd(2023, 12, 1), 5),
            HiringDataPoint::new(ymd(2024, 1, 1), 6),
        ])
        .unwrap();

        assert_eq!(series.get(ymd(2023, 12, 25)).map(|p| p.hires()), Some(5));
        assert!(series.get(ymd(2024, 2, 1)).is_none());
        assert_eq!(series.for_year(2023).hires(), vec![4, 5]);
        assert!(series.for_year(2022).is_empty());
    }

    #[test]
    fn test_json_shape() {
        let series = TimeSeries::new(vec![HiringDataPoint::new(ymd(2023, 1, 1), 51)]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[{"date":"2023-01-01","hires":51}]"#);

        let back: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);

        let broken = r#"[{"date":"2023-01-01","hires":1},{"date":"2023-05-01","hires":2}]"#;
        assert!(serde_json::from_str::<TimeSeries>(broken).is_err());
    }
}
