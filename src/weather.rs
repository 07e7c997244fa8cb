use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_FORECAST_DAYS: i64 = 1;
pub const MAX_FORECAST_DAYS: i64 = 14;
pub const DEFAULT_FORECAST_DAYS: i64 = 5;

pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherForecast {
    pub date: DateTime<Utc>,
    #[serde(rename = "temperatureC")]
    pub temperature_c: i32,
    pub summary: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Invalid number of days requested: {0}. Please request between 1 and 14 days.")]
    InvalidDaysRequested(i64),
}

pub fn validate_days(days: i64) -> Result<i64, ForecastError> {
    if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(ForecastError::InvalidDaysRequested(days));
    }
    Ok(days)
}

/// Forecast for a single day, `day_offset` days ahead of `now`.
pub fn generate_forecast(
    rng: &mut impl Rng,
    now: DateTime<Utc>,
    day_offset: i64,
) -> WeatherForecast {
    WeatherForecast {
        date: now + Duration::days(day_offset),
        temperature_c: rng.random_range(-20..55),
        summary: SUMMARIES[rng.random_range(0..SUMMARIES.len())].to_string(),
    }
}

fn generate_sequence(rng: &mut impl Rng, now: DateTime<Utc>, days: i64) -> Vec<WeatherForecast> {
    (1..=days)
        .map(|day_offset| {
            let forecast = generate_forecast(rng, now, day_offset);
            log::debug!(
                "Generated forecast: {}, {}°C, {}",
                forecast.date,
                forecast.temperature_c,
                forecast.summary
            );
            forecast
        })
        .collect()
}

/// Forecasts for the coming `days` days, starting tomorrow. Rejects the
/// request before generating anything if `days` is out of range.
pub fn list_forecasts(
    rng: &mut impl Rng,
    now: DateTime<Utc>,
    days: i64,
) -> Result<Vec<WeatherForecast>, ForecastError> {
    let days = validate_days(days)?;
    Ok(generate_sequence(rng, now, days))
}

pub fn default_forecasts(rng: &mut impl Rng, now: DateTime<Utc>) -> Vec<WeatherForecast> {
    generate_sequence(rng, now, DEFAULT_FORECAST_DAYS)
}
