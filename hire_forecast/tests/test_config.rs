use chrono::NaiveDate;
use hire_forecast::config::{DashboardConfig, CONFIG_ENV_VAR};
use hire_forecast::{Department, HireForecastError, TrendMode};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tempfile::NamedTempFile;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tests that touch `HIRECAST_CONFIG` hold this for their whole body
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", text).unwrap();
    file
}

#[test]
fn test_config_from_file() {
    let file = write_config(
        r#"
training_start = "2024-01-15"
prediction_year = 2026
trend = "down"
department = "hr"
baseline = 80
training_delay_ms = 0
seed = 42
"#,
    );

    let config = DashboardConfig::from_file(file.path()).unwrap();
    assert_eq!(config.trend, TrendMode::Down);
    assert_eq!(config.department, Department::Hr);
    assert_eq!(config.baseline, 80);

    let params = config.params(ymd(2025, 5, 1));
    assert_eq!(params.training_start, ymd(2024, 1, 15));
    assert_eq!(params.prediction_year, 2026);

    let settings = config.cycle_settings();
    assert_eq!(settings.training_delay, Duration::ZERO);
    assert_eq!(settings.seed, Some(42));
    assert_eq!(settings.baseline, 80);
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let file = write_config("trend = \"up\"\n");
    let config = DashboardConfig::from_file(file.path()).unwrap();

    let params = config.params(ymd(2025, 5, 20));
    assert_eq!(params.trend, TrendMode::Up);
    assert_eq!(params.training_start, ymd(2024, 5, 1));
    assert_eq!(params.prediction_year, 2026);
    assert_eq!(params.department, Department::Engineering);
    assert_eq!(
        config.cycle_settings().training_delay,
        Duration::from_millis(1500)
    );
}

#[test]
fn test_bad_values_are_rejected() {
    let file = write_config("trend = \"sideways\"\n");
    assert!(matches!(
        DashboardConfig::from_file(file.path()),
        Err(HireForecastError::TomlError(_))
    ));

    let file = write_config("department = \"Legal\"\n");
    assert!(DashboardConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = DashboardConfig::from_file("/nonexistent/hirecast.toml");
    assert!(matches!(result, Err(HireForecastError::IoError(_))));
}

#[test]
fn test_config_from_env() {
    let _env = lock_env();
    let file = write_config("prediction_year = 2030\n");
    std::env::set_var(CONFIG_ENV_VAR, file.path());

    let config = DashboardConfig::from_env().unwrap();
    assert_eq!(config.prediction_year, Some(2030));

    std::env::remove_var(CONFIG_ENV_VAR);
    assert!(matches!(
        DashboardConfig::from_env(),
        Err(HireForecastError::ConfigError(_))
    ));
}

#[test]
fn test_config_env_unset_is_config_error() {
    let _env = lock_env();
    std::env::remove_var(CONFIG_ENV_VAR);

    match DashboardConfig::from_env() {
        Err(HireForecastError::ConfigError(message)) => {
            assert!(message.contains(CONFIG_ENV_VAR));
        }
        other => panic!("expected a config error, got {:?}", other),
    }
}
