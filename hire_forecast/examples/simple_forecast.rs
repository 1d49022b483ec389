use chrono::{Local, NaiveDate};
use hire_forecast::calendar::months_back;
use hire_forecast::models::forecast_series;
use hire_forecast::{TrendMode, TrendSimulator};
use rand::thread_rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();
    let start = months_back(today, 12).ok_or("date out of range")?;
    let end = NaiveDate::from_ymd_opt(2030, 12, 31).ok_or("invalid end date")?;
    let mut rng = thread_rng();

    // Generate a year of upward-trending history
    let history = TrendSimulator::new(TrendMode::Up).generate(start, today, &mut rng);
    println!("Generated {} months of history", history.len());

    // Continue it through the end of 2030
    let forecast = forecast_series(&history, end, today, &mut rng)?;

    println!("Forecast through {}:", end);
    for point in &forecast {
        println!("{}: {}", point.month_key(), point.hires());
    }
    println!(
        "History total {} (avg {}), forecast total {}",
        history.total(),
        history.average(),
        forecast.total()
    );

    Ok(())
}
