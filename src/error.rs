use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::error;
use serde::Serialize;

use crate::weather::ForecastError;

pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again later.";

#[derive(Serialize, Debug)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: String,
    message: String,
    detail: Option<String>,
}

/// Boundary error: an HTTP status plus the wire-level error body. The `type`
/// values are stable identifiers that clients match on.
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
    detail: String,
    expose_detail: bool,
}

impl ApiError {
    pub fn from_forecast_error(error: ForecastError, expose_detail: bool) -> ApiError {
        let (status, kind) = match &error {
            ForecastError::InvalidDaysRequested(_) => (
                StatusCode::BAD_REQUEST,
                "InvalidWeatherForecastRequestException",
            ),
        };
        ApiError {
            status,
            kind,
            message: error.to_string(),
            detail: format!("{error:?}"),
            expose_detail,
        }
    }

    pub fn unexpected(detail: String, expose_detail: bool) -> ApiError {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "InternalServerError",
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            detail,
            expose_detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Logging in the conversion function covers every failure path before
        // a response exists. Full detail always goes to the log; the body
        // only carries it in development.
        error!(
            "Error encountered while processing request: {}: {} ({})",
            self.kind, self.message, self.detail
        );
        let body = ErrorBody {
            kind: self.kind.to_string(),
            message: self.message,
            detail: self.expose_detail.then_some(self.detail),
        };
        match serde_json::to_vec(&body) {
            Ok(bytes) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                bytes,
            )
                .into_response(),
            // Terminal handler: never fail, fall back to a fixed response
            // with no dynamic content.
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
