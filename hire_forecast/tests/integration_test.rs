use chrono::NaiveDate;
use hire_forecast::config::DashboardConfig;
use hire_forecast::models::forecast_series;
use hire_forecast::utils::write_chart_csv;
use hire_forecast::{
    Dashboard, ForecastModel, RandomWalkModel, TimeSeries, TrainedForecastModel, TrendMode,
    TrendSimulator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_generate_forecast_workflow() {
    let mut rng = StdRng::seed_from_u64(2025);
    let today = ymd(2025, 3, 12);

    // 1. Generate history
    let history = TrendSimulator::new(TrendMode::Up).generate(ymd(2024, 3, 1), today, &mut rng);
    assert_eq!(history.len(), 13);

    // 2. Train the placeholder model and forecast
    let model = RandomWalkModel::new().with_reference_date(today);
    let trained = model.train(&history).unwrap();
    let forecast = trained.forecast_until(ymd(2026, 12, 31), &mut rng).unwrap();
    assert_eq!(forecast.horizons(), 21);

    // 3. History and forecast join into one gap-free series
    let mut joined = history.points().to_vec();
    joined.extend_from_slice(forecast.series().points());
    let joined = TimeSeries::new(joined).unwrap();
    assert_eq!(joined.len(), 34);

    // 4. Summaries
    assert_eq!(joined.total(), history.total() + forecast.series().total());
    let summary = history.summary().unwrap();
    assert!(summary.net_change >= 12);
    assert_eq!(summary.count, 13);

    // 5. Persist through JSON
    let json = history.to_json().unwrap();
    let back: TimeSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back, history);
}

#[test]
fn test_forecast_of_restored_history() {
    let json = r#"[
        {"date": "2024-11-01", "hires": 3},
        {"date": "2024-12-01", "hires": 1}
    ]"#;
    let history: TimeSeries = serde_json::from_str(json).unwrap();

    let forecast =
        forecast_series(&history, ymd(2025, 6, 30), ymd(2024, 12, 2), &mut StdRng::seed_from_u64(1))
            .unwrap();
    assert_eq!(forecast.first().unwrap().date(), ymd(2025, 1, 1));
    assert_eq!(forecast.len(), 6);
}

#[tokio::test]
async fn test_config_driven_cycle_to_csv() {
    let config = DashboardConfig::from_toml_str(
        r#"
training_start = "2024-06-01"
prediction_year = 2025
trend = "stable"
training_delay_ms = 1
seed = 11
"#,
    )
    .unwrap();

    let today = ymd(2025, 1, 20);
    let params = config.params(today);
    params.validate(today).unwrap();

    let dashboard = Dashboard::new(params, config.cycle_settings());
    let snapshot = dashboard.train_and_predict(today).await.unwrap();
    assert_eq!(snapshot.historical.len(), 8);
    assert_eq!(snapshot.predicted.len(), 11);

    let chart = snapshot.chart_data();
    assert_eq!(chart.len(), 19);

    let mut out = Vec::new();
    write_chart_csv(&chart, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 20);
    assert!(text.starts_with("date,hires,kind\n2024-06-01,"));
    assert!(text.trim_end().ends_with("predicted"));
}
