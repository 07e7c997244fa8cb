use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use clap::ValueEnum;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::weather_api_routes;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

// Anything that goes in here must be a handle or value that is cheap to
// clone. The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub environment: Environment,
}

pub fn create_app(environment: Environment) -> Router {
    let state = AppState { environment };

    let mut app = Router::new()
        .nest(
            "/api/v1/weatherforecast",
            weather_api_routes::routes(state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| handle_panic(panic, environment),
        ));

    let assets_path = "assets";
    log::debug!("serving assets from {}", assets_path);
    let assets_service = ServeDir::new(assets_path);
    app = app.fallback_service(assets_service);
    app
}

// Terminal boundary for anything that escapes a handler.
fn handle_panic(panic: Box<dyn Any + Send + 'static>, environment: Environment) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::unexpected(detail, environment.is_development()).into_response()
}
