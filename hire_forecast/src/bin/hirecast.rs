use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use hire_forecast::config::{DashboardConfig, CONFIG_ENV_VAR};
use hire_forecast::utils::{parse_date, write_chart_csv};
use hire_forecast::{Dashboard, Department, SeriesKind, TrendMode};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(author, version, about = "Generate a hiring history and forecast it")]
struct Cli {
    /// Path to a TOML config file (falls back to $HIRECAST_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// First month of the history (YYYY-MM-DD or YYYY-MM)
    #[arg(long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Date treated as today (defaults to the local date)
    #[arg(long, value_parser = parse_date)]
    now: Option<NaiveDate>,

    /// Year the forecast runs through
    #[arg(short, long)]
    year: Option<i32>,

    /// Trend of the generated history: up, down or stable
    #[arg(short, long)]
    trend: Option<TrendMode>,

    /// Department label for the report
    #[arg(short, long)]
    department: Option<Department>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated training latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn load_config(cli: &Cli) -> Result<DashboardConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None if std::env::var_os(CONFIG_ENV_VAR).is_some() => DashboardConfig::from_env()?,
        None => DashboardConfig::default(),
    };

    if cli.start.is_some() {
        config.training_start = cli.start;
    }
    if cli.year.is_some() {
        config.prediction_year = cli.year;
    }
    if let Some(trend) = cli.trend {
        config.trend = trend;
    }
    if let Some(department) = cli.department {
        config.department = department;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.training_delay_ms = delay_ms;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let today = cli.now.unwrap_or_else(|| Local::now().date_naive());

    let params = config.params(today);
    params.validate(today)?;

    info!(
        department = %params.department,
        start = %params.training_start,
        year = params.prediction_year,
        "running train-and-predict cycle"
    );

    let dashboard = Dashboard::new(params, config.cycle_settings());
    let snapshot = dashboard.train_and_predict(today).await?;
    let chart = snapshot.chart_data();

    match cli.format {
        OutputFormat::Table => {
            println!("Department: {}", snapshot.params.department);
            print!("{}", snapshot.metrics());
            println!();
            println!("{:<12} {:>6}  {}", "month", "hires", "series");
            for point in &chart {
                let kind = match point.kind {
                    SeriesKind::Historical => "historical",
                    SeriesKind::Predicted => "predicted",
                };
                println!("{:<12} {:>6}  {}", point.date, point.hires, kind);
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "department": snapshot.params.department,
                "metrics": snapshot.metrics(),
                "chart": chart,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => write_chart_csv(&chart, io::stdout().lock())?,
    }

    Ok(())
}
