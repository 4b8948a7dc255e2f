//! demos/forecast.rs
//!
//! Looks up a place, fetches its 5 day / 3 hour forecast and prints the overview
//! table, the per-day detail and the status line.
//!
//! To run this example:
//! OPENWEATHER_APP_ID=... cargo run --example forecast -- --city Berlin --country DE
//!
//! Set RUST_LOG=info (or debug) to see the requests being made.

use clap::Parser;
use owm_forecast::{DayView, ForecastError, ForecastView, OverviewRow, StatusMessage, WeatherForecast};

#[derive(Parser, Debug)]
#[command(about = "Show the 5 day forecast for a place")]
struct Args {
    /// City name, e.g. "Berlin"
    #[arg(long)]
    city: Option<String>,

    /// State code (US only)
    #[arg(long)]
    state: Option<String>,

    /// ISO 3166 country code, e.g. "DE"
    #[arg(short, long)]
    country: Option<String>,

    /// Print charts and tables for every day
    #[arg(short, long)]
    details: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = run(&args).await;
    if let Ok(view) = &result {
        print_overview(view);
        if args.details {
            view.days.iter().for_each(print_detail);
        }
    }

    let status = StatusMessage::from_result(&result);
    if status.is_success() {
        println!("{}", status);
    } else {
        eprintln!("{}", status);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<ForecastView, ForecastError> {
    let client = WeatherForecast::from_env()?;
    client
        .forecast_view()
        .maybe_city(args.city.clone())
        .maybe_state_code(args.state.clone())
        .maybe_country_code(args.country.clone())
        .call()
        .await
}

fn print_overview(view: &ForecastView) {
    println!("Forecast for {}\n", view.location.display_name());
    println!("{}", format_row(&OverviewRow::HEADERS));
    for row in view.overview_rows() {
        println!("{}", format_row(&row.cells()));
    }
    println!();
}

fn format_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|c| format!("{:<18}", c))
        .collect::<Vec<_>>()
        .join("")
}

fn print_detail(day: &DayView) {
    println!("== {} ==", day.overview.date);
    if let Some(chart) = &day.detail.temperature_chart {
        println!(
            "temperature {}..{} °C  line: {}",
            chart.bounds.lower,
            chart.bounds.upper,
            chart.line_points()
        );
        println!("  band: {}", chart.band_points());
    }
    if let Some(chart) = &day.detail.wind_chart {
        println!(
            "wind {}..{} km/h  line: {}",
            chart.bounds.lower,
            chart.bounds.upper,
            chart.line_points()
        );
        println!("  band: {}", chart.band_points());
    }

    println!("time   humidity  rain   snow   pop    clouds");
    for row in &day.detail.water {
        let pop = row
            .precipitation_probability
            .map(|p| format!("{:.0}%", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}  {:>5.0}%  {:>5.1}  {:>5.1}  {:>5}  {:>4.0}%",
            row.time, row.humidity, row.rain, row.snow, pop, row.cloudiness
        );
    }

    println!("time   pressure  sea level  ground level");
    for row in &day.detail.pressure {
        let hpa = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.0}", v));
        println!(
            "{}  {:>8.0}  {:>9}  {:>12}",
            row.time,
            row.pressure,
            hpa(row.sea_level),
            hpa(row.ground_level)
        );
    }
    println!();
}
