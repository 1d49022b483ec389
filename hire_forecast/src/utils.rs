//! Utility functions for the hire_forecast crate

use crate::dashboard::ChartPoint;
use crate::error::Result;
use chrono::NaiveDate;
use std::io::Write;

/// Parse a calendar date given as `YYYY-MM-DD` or a month key `YYYY-MM`
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(full_err) => NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d")
            .map_err(|_| full_err.into()),
    }
}

/// Write chart points as CSV with a `date,hires,kind` header
pub fn write_chart_csv<W: Write>(points: &[ChartPoint], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SeriesKind;

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(parse_date("2024-03-01").unwrap(), expected);
        assert_eq!(parse_date(" 2024-03 ").unwrap(), expected);
        assert!(parse_date("March 2024").is_err());
        assert!(parse_date("2024-13").is_err());
    }

    #[test]
    fn test_write_chart_csv() {
        let points = [
            ChartPoint {
                date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                hires: 51,
                kind: SeriesKind::Historical,
            },
            ChartPoint {
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                hires: 52,
                kind: SeriesKind::Predicted,
            },
        ];

        let mut out = Vec::new();
        write_chart_csv(&points, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "date,hires,kind\n2024-12-01,51,historical\n2025-01-01,52,predicted\n"
        );
    }
}
