//! Descriptive statistics over hire counts

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Spread and range of a run of monthly hire counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiresSummary {
    /// Number of months
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest monthly count
    pub min: u32,
    /// Largest monthly count
    pub max: u32,
    /// Last count minus first count
    pub net_change: i64,
}

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty series".to_string(),
        ));
    }
    Ok(values.mean())
}

/// Population variance of the values
pub fn population_variance(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the variance of an empty series".to_string(),
        ));
    }
    Ok(values.population_variance())
}

/// Summarize a run of hire counts
pub fn summarize(hires: &[u32]) -> Result<HiresSummary> {
    let (first, last) = match (hires.first(), hires.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(MathError::InsufficientData(
                "Cannot summarize an empty series".to_string(),
            ))
        }
    };

    let values: Vec<f64> = hires.iter().map(|&h| f64::from(h)).collect();
    let variance = population_variance(&values)?;

    Ok(HiresSummary {
        count: hires.len(),
        mean: mean(&values)?,
        std_dev: variance.sqrt(),
        min: hires.iter().copied().min().unwrap_or(first),
        max: hires.iter().copied().max().unwrap_or(first),
        net_change: i64::from(last) - i64::from(first),
    })
}
