use chrono::NaiveDate;
use hire_forecast::{TrendMode, TrendSimulator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).ok_or("invalid start")?;
    let end = NaiveDate::from_ymd_opt(2024, 12, 1).ok_or("invalid end")?;

    println!("{:<8} {:>8} {:>8} {:>8} {:>8}", "trend", "mean", "std", "min", "max");
    for mode in TrendMode::ALL {
        let mut rng = StdRng::seed_from_u64(42);
        let series = TrendSimulator::new(mode).generate(start, end, &mut rng);
        let summary = series.summary()?;
        println!(
            "{:<8} {:>8.1} {:>8.2} {:>8} {:>8}",
            mode, summary.mean, summary.std_dev, summary.min, summary.max
        );
    }

    Ok(())
}
