use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::Utc;

use crate::app::AppState;
use crate::error::ApiError;
use crate::weather::{self, WeatherForecast};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_default_forecasts))
        .route("/{days}", get(get_forecasts))
        .with_state(state)
}

async fn get_default_forecasts() -> Json<Vec<WeatherForecast>> {
    log::info!("Retrieving weather forecasts");
    let forecasts = weather::default_forecasts(&mut rand::rng(), Utc::now());
    log::info!("Successfully retrieved {} weather forecasts", forecasts.len());
    Json(forecasts)
}

async fn get_forecasts(
    State(state): State<AppState>,
    Path(days): Path<i64>,
) -> Result<Json<Vec<WeatherForecast>>, ApiError> {
    log::info!("Retrieving weather forecasts for {} days", days);
    let forecasts = weather::list_forecasts(&mut rand::rng(), Utc::now(), days)
        .map_err(|error| {
            ApiError::from_forecast_error(error, state.environment.is_development())
        })?;
    log::info!("Successfully retrieved {} weather forecasts", forecasts.len());
    Ok(Json(forecasts))
}
