//! Sum and mean over monthly hire counts
//!
//! Both operations are pure: they only read the counts they are given.

/// Sum of all hire counts, `0` for no counts
pub fn total<I>(hires: I) -> u64
where
    I: IntoIterator<Item = u32>,
{
    hires.into_iter().map(u64::from).sum()
}

/// Mean hire count, `None` for no counts
pub fn average<I>(hires: I) -> Option<f64>
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = hires
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), h| (sum + u64::from(h), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Mean of `total / count` in tenths, rounded half up
///
/// Integer arithmetic keeps exact ties such as `25.25` or `1.45` from being
/// rounded down by binary floating point: `29 / 20` shows as `1.5`, while
/// formatting the `f64` quotient with `{:.1}` gives `1.4`.
pub fn average_tenths(total: u64, count: usize) -> Option<u64> {
    if count == 0 {
        return None;
    }

    let count = count as u128;
    let tenths = (u128::from(total) * 20 + count) / (2 * count);
    Some(tenths as u64)
}

/// Mean formatted with one fractional digit, `"0"` for no counts
///
/// # Examples
///
/// ```
/// use hire_math::format_average;
///
/// assert_eq!(format_average(101, 4), "25.3");
/// assert_eq!(format_average(0, 0), "0");
/// ```
pub fn format_average(total: u64, count: usize) -> String {
    match average_tenths(total, count) {
        Some(tenths) => format!("{}.{}", tenths / 10, tenths % 10),
        None => "0".to_string(),
    }
}
