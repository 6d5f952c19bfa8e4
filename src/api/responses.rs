//! HTTP response mapping
//!
//! Converts gateway errors into status codes and plain-text bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::error::GatewayError;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Gateway error: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}
